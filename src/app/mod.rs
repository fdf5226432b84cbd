//! Application-Layer: Controller, State, Events und Listen-Synchronisation.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod list_delta;
pub mod registry_controller;
/// Fensterzustand (Liste, Eingaben, Meldungen)
pub mod state;
pub mod visible_list;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, SelectionAction};
pub use list_delta::ListDelta;
pub use registry_controller::{Captured, RegistryController};
pub use state::{AppState, Notification, UiState};
pub use visible_list::VisibleList;
