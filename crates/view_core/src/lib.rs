//! View state controller: the single owned session state (mode, selected layer,
//! panel visibility) and the transitions the presentation surface may drive.
//!
//! Mutation happens one interaction at a time on the UI thread; nothing here
//! blocks, suspends or performs I/O.

use catalog::Catalog;
use serde::Serialize;
use shared::{
    domain::{Layer, LayerId, Mode, ModeNarrative, VisualHandle},
    error::ViewError,
};
use tracing::{debug, warn};

/// Session state. Only [`ViewStateController`] can change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    mode: Mode,
    active_layer_id: LayerId,
    panel_open: bool,
}

impl ViewState {
    fn initial(catalog: &Catalog) -> Self {
        Self {
            mode: Mode::Baseline,
            active_layer_id: catalog.first().id,
            panel_open: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_layer_id(&self) -> LayerId {
        self.active_layer_id
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "layer_id", rename_all = "snake_case")]
pub enum PanelState {
    Closed,
    Open(LayerId),
}

/// Owned snapshot handed to renderers; holds a copy of the layer, never a
/// handle back into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub layer: Layer,
    pub mode: Mode,
    pub panel_open: bool,
}

impl Selection {
    pub fn narrative(&self) -> ModeNarrative {
        self.layer.narrative(self.mode)
    }

    pub fn visual(&self) -> VisualHandle {
        self.layer.visual(self.mode)
    }
}

#[derive(Debug, Clone)]
pub struct ViewStateController<'c> {
    catalog: &'c Catalog,
    state: ViewState,
}

impl Default for ViewStateController<'static> {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl<'c> ViewStateController<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            state: ViewState::initial(catalog),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn all_layers(&self) -> &'c [Layer] {
        self.catalog.all_layers()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.state.mode != mode {
            debug!(from = %self.state.mode, to = %mode, "mode changed");
        }
        self.state.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.state.mode.other());
    }

    /// Selects `id` and opens the panel. Selecting the layer that is already
    /// open keeps the panel open.
    pub fn select_layer(&mut self, id: &str) -> Result<(), ViewError> {
        let layer = self.catalog.layer_by_id(id).map_err(|_| {
            warn!(layer_id = id, "rejected selection of unknown layer");
            ViewError::UnknownLayer(id.to_string())
        })?;

        self.state.active_layer_id = layer.id;
        self.state.panel_open = true;
        debug!(layer_id = %layer.id, "panel opened");
        Ok(())
    }

    /// Hides the panel; the active layer is kept so reopening shows it again.
    pub fn close_panel(&mut self) {
        if self.state.panel_open {
            debug!(layer_id = %self.state.active_layer_id, "panel closed");
        }
        self.state.panel_open = false;
    }

    pub fn panel_state(&self) -> PanelState {
        if self.state.panel_open {
            PanelState::Open(self.state.active_layer_id)
        } else {
            PanelState::Closed
        }
    }

    pub fn current_selection(&self) -> Selection {
        Selection {
            layer: *self.active_layer(),
            mode: self.state.mode,
            panel_open: self.state.panel_open,
        }
    }

    /// 1-based position of the active layer in storage order.
    pub fn active_position(&self) -> usize {
        let position = self.catalog.position(self.state.active_layer_id);
        debug_assert!(
            position.is_some(),
            "active layer '{}' missing from catalog",
            self.state.active_layer_id
        );
        position.unwrap_or(1)
    }

    fn active_layer(&self) -> &'c Layer {
        // active_layer_id is only ever assigned from a catalog entry
        let layer = self
            .catalog
            .all_layers()
            .iter()
            .find(|layer| layer.id == self.state.active_layer_id);
        debug_assert!(
            layer.is_some(),
            "active layer '{}' missing from catalog",
            self.state.active_layer_id
        );
        layer.unwrap_or_else(|| self.catalog.first())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
