//! Blockierende Fehlermeldung nach einer fehlgeschlagenen Aktion.

use crate::app::{AppIntent, UiState};

/// Zeigt die offene Meldung als modales Fenster.
pub fn show_notification(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(notification) = &ui_state.notification else {
        return events;
    };

    egui::Window::new(notification.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            if notification.is_internal {
                ui.colored_label(
                    egui::Color32::from_rgb(230, 80, 60),
                    "Registry und Liste sind nicht mehr synchron.",
                );
                ui.add_space(4.0);
            }
            ui.label(notification.message.as_str());

            ui.add_space(10.0);
            // Enter aus einem Textfeld gehört dem Feld, nicht der Meldung.
            let enter =
                !ctx.wants_keyboard_input() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("OK").clicked() || enter {
                events.push(AppIntent::NotificationDismissed);
            }
        });

    events
}
