use super::*;

#[test]
fn starts_closed_in_baseline_on_first_layer() {
    let controller = ViewStateController::default();
    let state = controller.state();

    assert_eq!(state.mode(), Mode::Baseline);
    assert!(!state.panel_open());
    assert_eq!(state.active_layer_id(), LayerId("foundation"));
    assert_eq!(controller.panel_state(), PanelState::Closed);
    assert_eq!(controller.active_position(), 1);
}

#[test]
fn select_opens_panel_and_records_layer() {
    let mut controller = ViewStateController::default();
    controller.select_layer("safety").expect("known layer");

    assert_eq!(controller.panel_state(), PanelState::Open(LayerId("safety")));
    assert_eq!(controller.active_position(), 5);
}

#[test]
fn rejected_selection_leaves_state_untouched() {
    let mut controller = ViewStateController::default();
    controller.set_mode(Mode::Target);
    controller.select_layer("utilities").expect("known layer");
    controller.close_panel();
    let before = controller.state();

    let err = controller.select_layer("basement").expect_err("unknown");

    assert_eq!(err, ViewError::UnknownLayer("basement".to_string()));
    assert_eq!(controller.state(), before);
}

#[test]
fn toggle_mode_flips_only_the_mode() {
    let mut controller = ViewStateController::default();
    controller.select_layer("facade").expect("known layer");
    let before = controller.state();

    controller.toggle_mode();
    assert_eq!(controller.state().mode(), Mode::Target);
    controller.toggle_mode();

    assert_eq!(controller.state(), before);
}

#[test]
fn selection_resolves_mode_specific_copy() {
    let mut controller = ViewStateController::default();
    controller.select_layer("structure").expect("known layer");

    let baseline = controller.current_selection();
    assert!(baseline.narrative().lead.starts_with("We craft every house"));
    assert_eq!(baseline.visual(), VisualHandle("structure/wooden-framing"));

    controller.set_mode(Mode::Target);
    let target = controller.current_selection();
    assert!(target.narrative().follow_up.starts_with("We stopped treating code"));
    assert_eq!(target.visual(), VisualHandle("structure/steel-trusses"));
}

#[test]
fn panel_state_serializes_with_tag() {
    let open = serde_json::to_value(PanelState::Open(LayerId("facade"))).expect("serialize");
    assert_eq!(open["state"], "open");
    assert_eq!(open["layer_id"], "facade");

    let closed = serde_json::to_value(PanelState::Closed).expect("serialize");
    assert_eq!(closed["state"], "closed");
}

#[test]
fn active_position_tracks_every_selection() {
    let mut controller = ViewStateController::default();
    for (index, layer) in controller.all_layers().iter().enumerate() {
        controller.select_layer(layer.id.as_str()).expect("known layer");
        assert_eq!(controller.active_position(), index + 1);
        assert_eq!(controller.current_selection().layer.id, layer.id);
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "missing from catalog")]
fn dangling_active_layer_trips_debug_assertion() {
    let mut controller = ViewStateController::default();
    controller.state.active_layer_id = LayerId("attic");
    controller.current_selection();
}
