//! Handler für Listenmarkierung, Reapply-Modus und Fenster-Lebenszyklus.

use crate::app::AppState;
use crate::core::{ReapplyMode, SelectionRegistry};

/// Markiert eine Listenzeile. Ungültige Indizes heben die Markierung auf.
pub fn highlight_entry(state: &mut AppState, index: usize) {
    if !state.list.highlight(index) {
        log::warn!(
            "Listenindex {} außerhalb der Liste ({} Einträge)",
            index,
            state.list.len()
        );
        state.list.clear_highlight();
    }
}

/// Setzt den Reapply-Modus der Radio-Gruppe.
pub fn set_reapply_mode(state: &mut AppState, mode: ReapplyMode) {
    state.ui.mode = mode;
}

/// Schließt das Fenster. Die Registry bleibt unangetastet.
pub fn close_window(state: &mut AppState) {
    state.ui.window_open = false;
    log::info!("History-Fenster geschlossen");
}

/// Öffnet das Fenster und baut die Liste aus der Registry neu auf.
pub fn open_window(state: &mut AppState, registry: &SelectionRegistry) {
    state.reopen(registry);
    log::info!(
        "History-Fenster geöffnet ({} gespeicherte Selektionen)",
        state.list.len()
    );
}
