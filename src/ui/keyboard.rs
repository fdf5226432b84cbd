//! Keyboard-Shortcuts für die Nickname-Liste.

use crate::app::{AppIntent, AppState};

/// Verarbeitet Tasten und gibt AppIntents zurück.
///
/// Entf/Backspace verwirft den markierten Eintrag, solange kein Textfeld
/// den Fokus hat und keine Meldung offen ist.
pub fn collect_keyboard_intents(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.window_open || state.ui.notification.is_some() || ctx.wants_keyboard_input() {
        return events;
    }

    let delete_pressed =
        ctx.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace));

    if delete_pressed {
        events.push(AppIntent::DiscardRequested);
    }

    events
}
