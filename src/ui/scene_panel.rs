//! Demo-Host: Szenen-Panel mit klickbaren Elementen.
//!
//! Gehört zur Host-Seite; es verändert die Szene direkt und liefert nur
//! den Öffnen-Intent für das History-Fenster.

use crate::app::{AppIntent, AppState};
use crate::core::InMemoryScene;

/// Rendert die Szene als Liste selektierbarer Elemente.
pub fn render_scene_panel(
    ctx: &egui::Context,
    scene: &mut InMemoryScene,
    state: &AppState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("scene_toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    !state.ui.window_open,
                    egui::Button::new("Selection History öffnen"),
                )
                .clicked()
            {
                events.push(AppIntent::OpenWindowRequested);
            }
            ui.separator();
            if ui.button("Selektion aufheben").clicked() {
                scene.clear_selection();
            }
            ui.separator();
            if ui.button("Optionen zurücksetzen").clicked() {
                events.push(AppIntent::ResetOptionsRequested);
            }
        });
    });

    egui::TopBottomPanel::bottom("scene_status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let selection = scene.selection();
            match (selection.first(), selection.last()) {
                (Some(first), Some(last)) => ui.label(format!(
                    "Selektiert: {} ({} … {})",
                    selection.len(),
                    first,
                    last
                )),
                _ => ui.label("Selektiert: 0"),
            };
            ui.separator();
            ui.label(format!("Gespeicherte Selektionen: {}", state.list.len()));
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.label("Szene (Klick = selektieren, Ctrl+Klick = umschalten):");
        ui.add_space(4.0);

        let mut clicked = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for element in scene.catalog() {
                    let selected = scene.is_selected(element);
                    if ui.selectable_label(selected, element.as_str()).clicked() {
                        let additive = ui.input(|i| i.modifiers.command);
                        clicked = Some((element.clone(), additive));
                    }
                }
            });
        });

        if let Some((element, additive)) = clicked {
            if additive {
                scene.toggle(element);
            } else {
                scene.select_only(element);
            }
        }
    });

    events
}
