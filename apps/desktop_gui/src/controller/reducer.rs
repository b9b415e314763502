//! Applies queued UI events to the view state controller, one at a time.

use view_core::ViewStateController;

use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn apply_event(
    controller: &mut ViewStateController<'_>,
    event: UiEvent,
) -> Result<(), UiError> {
    tracing::trace!(event = event.name(), "applying ui event");
    match event {
        UiEvent::SetMode(mode) => controller.set_mode(mode),
        UiEvent::SelectLayer(id) => controller
            .select_layer(id.as_str())
            .map_err(|err| UiError::from_view_error(UiErrorContext::SelectLayer, &err))?,
        UiEvent::ClosePanel => controller.close_panel(),
    }
    Ok(())
}

/// Drains `events` in order. A rejected event does not stop later ones; the
/// last rejection is returned for the status line.
pub fn drain_events(
    controller: &mut ViewStateController<'_>,
    events: &mut Vec<UiEvent>,
) -> Option<UiError> {
    let mut last_error = None;
    for event in events.drain(..) {
        if let Err(err) = apply_event(controller, event) {
            tracing::warn!(event = event.name(), error = err.message(), "ui event rejected");
            last_error = Some(err);
        }
    }
    last_error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorCategory;
    use shared::domain::{LayerId, Mode};
    use view_core::PanelState;

    #[test]
    fn applies_events_in_order() {
        let mut controller = ViewStateController::default();
        let mut events = vec![
            UiEvent::SelectLayer(LayerId("foundation")),
            UiEvent::SetMode(Mode::Target),
            UiEvent::SelectLayer(LayerId("structure")),
        ];

        assert_eq!(drain_events(&mut controller, &mut events), None);
        assert!(events.is_empty());
        assert_eq!(
            controller.panel_state(),
            PanelState::Open(LayerId("structure"))
        );
        assert_eq!(controller.state().mode(), Mode::Target);
    }

    #[test]
    fn sky_click_after_floor_click_closes_panel() {
        let mut controller = ViewStateController::default();
        let mut events = vec![
            UiEvent::SelectLayer(LayerId("facade")),
            UiEvent::ClosePanel,
        ];

        drain_events(&mut controller, &mut events);

        assert_eq!(controller.panel_state(), PanelState::Closed);
        assert_eq!(controller.state().active_layer_id(), LayerId("facade"));
    }

    #[test]
    fn rejected_selection_is_reported_and_later_events_still_apply() {
        let mut controller = ViewStateController::default();
        let mut events = vec![
            UiEvent::SelectLayer(LayerId("attic")),
            UiEvent::SetMode(Mode::Target),
        ];

        let err = drain_events(&mut controller, &mut events).expect("rejection");

        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(controller.panel_state(), PanelState::Closed);
        assert_eq!(controller.state().mode(), Mode::Target);
    }
}
