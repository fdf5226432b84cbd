//! Das Selection-History-Fenster: Liste, Modus-Auswahl, Nickname-Eingabe.
//!
//! Rein deklarativ: rendert den Zustand und gibt Intents zurück. Nur das
//! Eingabefeld schreibt direkt in den UI-State.

use crate::app::{AppIntent, AppState};
use crate::core::ReapplyMode;

const LIST_TOOLTIP: &str = "Tipp: Doppelklick zum Selektieren, Entf zum Entfernen des Eintrags";
const NICKNAME_TOOLTIP: &str = "Tipp: Enter fügt den Eintrag hinzu";

/// Wandelt eine RGB-Option (0.0–1.0) in eine egui-Farbe.
fn rgb(color: [f32; 3]) -> egui::Color32 {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgb(r, g, b)
}

/// Rendert das History-Fenster und gibt erzeugte Events zurück.
pub fn render_history_window(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.window_open {
        return events;
    }

    let width = state.options.window_width;
    let mut open = true;

    egui::Window::new("Selection History")
        .open(&mut open)
        .collapsible(true)
        .resizable(false)
        .default_width(width)
        .default_height(state.options.window_height)
        .show(ctx, |ui| {
            ui.set_width(width);

            ui.vertical_centered(|ui| ui.label("Selection History Recorded:"));
            render_nickname_list(ui, state, &mut events);

            ui.add_space(4.0);
            ui.vertical_centered(|ui| ui.label("Modify Current Selection in Scene:"));
            ui.horizontal(|ui| {
                for mode in ReapplyMode::ALL {
                    if ui
                        .radio(state.ui.mode == mode, mode.label())
                        .clicked()
                        && state.ui.mode != mode
                    {
                        events.push(AppIntent::ReapplyModeChanged { mode });
                    }
                }
            });

            let select_button =
                egui::Button::new("Select").fill(rgb(state.options.select_button_color));
            if ui.add_sized([width, 24.0], select_button).clicked() {
                events.push(AppIntent::ReapplyRequested);
            }

            ui.separator();

            ui.vertical_centered(|ui| ui.label("Nickname (Alias) for Selection:"));
            let response = ui
                .add_sized(
                    [width, 20.0],
                    egui::TextEdit::singleline(&mut state.ui.nickname_input),
                )
                .on_hover_text(NICKNAME_TOOLTIP);
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let add_button =
                egui::Button::new("Add Selection").fill(rgb(state.options.add_button_color));
            if ui.add_sized([width, 24.0], add_button).clicked() || enter_pressed {
                events.push(AppIntent::CaptureRequested {
                    label: state.ui.nickname_input.clone(),
                });
            }
        });

    if !open {
        events.push(AppIntent::CloseWindowRequested);
    }

    events
}

/// Rendert die Nickname-Liste mit Einfach-Markierung.
fn render_nickname_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + ui.spacing().item_spacing.y;
    let list_height = state.options.list_height(row_height);
    let highlighted = state.list.highlighted_index();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .min_scrolled_height(list_height)
            .max_height(list_height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, nickname) in state.list.entries().iter().enumerate() {
                    let response = ui
                        .selectable_label(highlighted == Some(index), nickname)
                        .on_hover_text(LIST_TOOLTIP);
                    if response.double_clicked() {
                        events.push(AppIntent::ListEntryDoubleClicked { index });
                    } else if response.clicked() {
                        events.push(AppIntent::ListEntryClicked { index });
                    }
                }
            });
    });
}
