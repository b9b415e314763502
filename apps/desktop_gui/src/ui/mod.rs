//! UI layer for the desktop surface: app shell, info panel, palettes and the
//! floor visuals.

pub mod app;
pub mod panels;
pub mod theme;
pub mod visuals;

pub use app::RebuildApp;
