//! Modell der sichtbaren, geordneten Nickname-Liste (Anzeige-Seite).
//!
//! Die Liste hält höchstens einen markierten Eintrag. Discard und Reapply
//! lesen den Nickname über `selected_nickname()`.

use super::ListDelta;
use crate::core::{RegistryError, SelectionRegistry};

/// Geordnete Nickname-Liste mit Einfach-Markierung.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleList {
    entries: Vec<String>,
    highlighted: Option<usize>,
}

impl VisibleList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Liste beim (Wieder-)Öffnen des Fensters aus der Registry auf.
    pub fn from_registry(registry: &SelectionRegistry) -> Self {
        Self {
            entries: registry.keys_in_order().map(str::to_owned).collect(),
            highlighted: None,
        }
    }

    /// Wendet ein Delta an.
    ///
    /// Ein `RemoveAt` außerhalb der Liste liefert `ListDesync` und ändert nichts.
    pub fn apply(&mut self, delta: &ListDelta) -> Result<(), RegistryError> {
        match delta {
            ListDelta::Append(nickname) => self.entries.push(nickname.clone()),
            ListDelta::RemoveAt(index) => {
                let index = *index;
                if index >= self.entries.len() {
                    return Err(RegistryError::ListDesync {
                        index,
                        len: self.entries.len(),
                    });
                }
                self.entries.remove(index);
                self.highlighted = match self.highlighted {
                    Some(h) if h == index => None,
                    Some(h) if h > index => Some(h - 1),
                    other => other,
                };
            }
        }
        Ok(())
    }

    /// Markiert den Eintrag an `index`. Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn highlight(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.highlighted = Some(index);
            true
        } else {
            false
        }
    }

    /// Hebt die Markierung auf.
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Index des markierten Eintrags.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Nickname des markierten Eintrags (genau einer oder keiner).
    pub fn selected_nickname(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    /// Prüft, dass an `index` genau `nickname` steht.
    pub fn expect_entry(&self, index: usize, nickname: &str) -> Result<(), RegistryError> {
        match self.entries.get(index) {
            Some(entry) if entry == nickname => Ok(()),
            _ => Err(RegistryError::ListDesync {
                index,
                len: self.entries.len(),
            }),
        }
    }

    /// Prüft, ob die Liste exakt die Schlüssel-Reihenfolge der Registry spiegelt.
    pub fn mirrors(&self, registry: &SelectionRegistry) -> bool {
        self.entries
            .iter()
            .map(String::as_str)
            .eq(registry.keys_in_order())
    }

    /// Alle Einträge in Anzeige-Reihenfolge.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Gibt die Anzahl der Einträge zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn die Liste leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
