//! UI-Layer mit egui: History-Fenster, Meldungen, Tastatur und Demo-Szene.
//!
//! Die Render-Funktionen lesen den Zustand und geben `AppIntent`s zurück;
//! Registry-Mutationen passieren ausschließlich im Controller.

pub mod history_window;
mod keyboard;
pub mod notification;
pub mod scene_panel;

pub use history_window::render_history_window;
pub use keyboard::collect_keyboard_intents;
pub use notification::show_notification;
pub use scene_panel::render_scene_panel;
