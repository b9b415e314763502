//! Controller layer: UI events and the reducer that applies them to the view
//! state controller.

pub mod events;
pub mod reducer;
