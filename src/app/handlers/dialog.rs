//! Handler für Meldungen und Optionen.

use std::path::Path;

use crate::app::AppState;
use crate::shared::HistoryOptions;

/// Schließt die blockierende Meldung.
pub fn dismiss_notification(state: &mut AppState) {
    state.ui.notification = None;
}

/// Setzt alle Optionen auf Standardwerte zurück und speichert sie neben der Binary.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    reset_options_to(state, &HistoryOptions::config_path())
}

/// Wie `reset_options`, aber mit explizitem Zielpfad.
///
/// Schlägt das Speichern fehl, bleiben Optionen und Modus unverändert.
pub fn reset_options_to(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let defaults = HistoryOptions::default();
    defaults.save_to_file(path)?;

    state.ui.mode = defaults.default_mode;
    state.options = defaults;
    log::info!("Optionen auf Standardwerte zurückgesetzt");
    Ok(())
}
