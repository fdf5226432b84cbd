//! AppIntent-, AppCommand- und SelectionAction-Enums für den Intent/Command-Datenfluss.

mod action;
mod command;
mod intent;

pub use action::SelectionAction;
pub use command::AppCommand;
pub use intent::AppIntent;
