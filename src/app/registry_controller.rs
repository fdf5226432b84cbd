//! Übersetzt Capture/Discard/Reapply in Registry-Mutationen und Listen-Deltas.
//!
//! Der Controller hält außer der Registry-Referenz keinen eigenen Zustand.
//! Er mutiert nie die Liste selbst; er liefert das Delta, das die Anzeige
//! im selben Aufruf anwenden muss.

use super::{ListDelta, SelectionAction};
use crate::core::{
    derive_nickname, Element, ReapplyMode, RegistryError, SceneHost, SelectionRegistry,
    SelectionSink, Snapshot, DEFAULT_RANGE_SEPARATOR,
};

/// Ergebnis eines Captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Abgeleiteter Nickname
    pub nickname: String,
    /// `Some(Append)` für neue Nicknames, `None` beim Überschreiben an Ort und Stelle
    pub delta: Option<ListDelta>,
}

/// Vermittelt Benutzer-Aktionen gegen die Session-Registry.
pub struct RegistryController<'a> {
    registry: &'a mut SelectionRegistry,
    separator: &'a str,
}

impl<'a> RegistryController<'a> {
    /// Erstellt einen Controller über der übergebenen Registry.
    pub fn new(registry: &'a mut SelectionRegistry) -> Self {
        Self {
            registry,
            separator: DEFAULT_RANGE_SEPARATOR,
        }
    }

    /// Setzt den Range-Trenner für abgeleitete Nicknames.
    pub fn with_separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Speichert die aktuelle Selektion unter einem abgeleiteten Nickname.
    ///
    /// Eine leere Selektion wird mit `EmptySelection` abgelehnt.
    pub fn capture(
        &mut self,
        label: &str,
        current_selection: Vec<Element>,
    ) -> Result<Captured, RegistryError> {
        let snapshot = Snapshot::new(current_selection);
        let nickname = derive_nickname(label, &snapshot, self.separator)?;
        let count = snapshot.len();

        let is_new = self.registry.put(nickname.clone(), snapshot)?;
        if is_new {
            log::info!("Selektion gespeichert: '{}' ({} Elemente)", nickname, count);
        } else {
            log::info!(
                "Selektion überschrieben: '{}' ({} Elemente, Position unverändert)",
                nickname,
                count
            );
        }

        let delta = is_new.then(|| ListDelta::Append(nickname.clone()));
        Ok(Captured { nickname, delta })
    }

    /// Entfernt den markierten Nickname und liefert den zu entfernenden Listen-Index.
    pub fn discard(&mut self, selected: Option<&str>) -> Result<ListDelta, RegistryError> {
        let nickname = selected.ok_or(RegistryError::NoSelection)?;
        let index = self
            .registry
            .remove(nickname)
            .inspect_err(|e| log_desync("Discard", e))?;
        log::info!("Selektion verworfen: '{}' (Index {})", nickname, index);
        Ok(ListDelta::RemoveAt(index))
    }

    /// Wendet den Snapshot des markierten Nicknames mit `mode` auf den Host an.
    ///
    /// Die Mengen-Arithmetik übernimmt der Host.
    pub fn reapply<S: SelectionSink + ?Sized>(
        &self,
        selected: Option<&str>,
        mode: ReapplyMode,
        sink: &mut S,
    ) -> Result<(), RegistryError> {
        let nickname = selected.ok_or(RegistryError::NoSelection)?;
        let snapshot = self
            .registry
            .get(nickname)
            .inspect_err(|e| log_desync("Reapply", e))?;
        sink.apply_selection(snapshot, mode);
        log::info!(
            "Selektion angewendet: '{}' ({:?}, {} Elemente)",
            nickname,
            mode,
            snapshot.len()
        );
        Ok(())
    }

    /// Führt eine getaggte Aktion aus.
    ///
    /// `selected` ist die Markierung der sichtbaren Liste, `host` die Szene.
    pub fn dispatch(
        &mut self,
        action: SelectionAction,
        selected: Option<&str>,
        host: &mut dyn SceneHost,
    ) -> Result<Option<ListDelta>, RegistryError> {
        match action {
            SelectionAction::Capture { label } => {
                let captured = self.capture(&label, host.current_selection())?;
                Ok(captured.delta)
            }
            SelectionAction::Discard => self.discard(selected).map(Some),
            SelectionAction::Reapply { mode } => {
                self.reapply(selected, mode, host)?;
                Ok(None)
            }
        }
    }
}

/// Ein `NotFound` für einen Nickname aus der sichtbaren Liste ist eine Invariantenverletzung.
fn log_desync(operation: &str, error: &RegistryError) {
    if let RegistryError::NotFound { nickname } = error {
        log::error!(
            "{}: Registry und Liste desynchronisiert, '{}' fehlt in der Registry",
            operation,
            nickname
        );
    }
}

#[cfg(test)]
mod tests;
