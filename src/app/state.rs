//! Application State — Fensterzustand der Selection History.
//!
//! Die Registry selbst gehört nicht hierher: sie lebt für die ganze Session
//! beim Aufrufer und wird bei jedem Öffnen des Fensters übergeben.

mod app_state;
mod dialogs;

pub use app_state::AppState;
pub use dialogs::{Notification, UiState};
