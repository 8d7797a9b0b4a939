//! Terminal UI for replaying recorded runs

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
