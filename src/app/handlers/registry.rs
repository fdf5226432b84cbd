//! Handler für Registry-Aktionen (Capture, Discard, Reapply).
//!
//! Registry und sichtbare Liste werden immer im selben Aufruf verändert.
//! Schlägt ein Schritt fehl, bleiben beide unverändert.

use crate::app::{AppState, RegistryController, SelectionAction};
use crate::core::{SceneHost, SelectionRegistry};

/// Führt eine Registry-Aktion gegen die markierte Listenzeile aus.
pub fn run_action(
    state: &mut AppState,
    registry: &mut SelectionRegistry,
    host: &mut dyn SceneHost,
    action: SelectionAction,
) -> anyhow::Result<()> {
    let selected = state.selected_nickname().map(str::to_owned);

    if matches!(action, SelectionAction::Discard) {
        ensure_entry_matches_registry(state, registry, selected.as_deref())?;
    }

    let delta = RegistryController::new(registry)
        .with_separator(&state.options.range_separator)
        .dispatch(action, selected.as_deref(), host)?;

    if let Some(delta) = delta {
        state.list.apply(&delta)?;
    }

    if !state.list.mirrors(registry) {
        log::error!(
            "Liste ({} Einträge) spiegelt die Registry ({} Einträge) nicht mehr",
            state.list.len(),
            registry.len()
        );
    }

    Ok(())
}

/// Prüft vor dem Löschen, dass die Listenposition der Registry-Position entspricht.
///
/// Sonst würde `RemoveAt` einen falschen Eintrag aus der Liste entfernen.
fn ensure_entry_matches_registry(
    state: &AppState,
    registry: &SelectionRegistry,
    selected: Option<&str>,
) -> anyhow::Result<()> {
    let Some(nickname) = selected else {
        return Ok(());
    };
    if let Some(index) = registry.position(nickname) {
        state.list.expect_entry(index, nickname).inspect_err(|e| {
            log::error!(
                "Discard abgebrochen, '{}' steht nicht an Registry-Position {}: {}",
                nickname,
                index,
                e
            );
        })?;
    }
    Ok(())
}
