//! In-Session-Registry aller benannten Selektions-Snapshots.
//!
//! Die Registry ist transient: sie lebt für die Dauer der Host-Session und
//! wird nie persistiert. Das Fenster erhält sie bei jedem Öffnen als
//! Referenz und erzeugt oder leert sie nie selbst.

use super::{RegistryError, Snapshot};
use indexmap::IndexMap;

/// Nickname → Snapshot, in Einfüge-Reihenfolge.
///
/// Überschreiben eines bestehenden Nicknames ändert dessen Position nicht.
#[derive(Debug, Clone, Default)]
pub struct SelectionRegistry {
    entries: IndexMap<String, Snapshot>,
}

impl SelectionRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Eintrag ein oder überschreibt ihn an seiner bisherigen Position.
    ///
    /// Gibt `true` zurück, wenn der Nickname neu ist.
    pub fn put(
        &mut self,
        nickname: impl Into<String>,
        snapshot: Snapshot,
    ) -> Result<bool, RegistryError> {
        let nickname = nickname.into();
        if nickname.is_empty() {
            return Err(RegistryError::InvalidArgument);
        }
        Ok(self.entries.insert(nickname, snapshot).is_none())
    }

    /// Entfernt genau einen Eintrag und gibt dessen bisherige Position zurück.
    ///
    /// Nachfolgende Einträge rücken um eins auf (Reihenfolge bleibt erhalten).
    pub fn remove(&mut self, nickname: &str) -> Result<usize, RegistryError> {
        self.entries
            .shift_remove_full(nickname)
            .map(|(index, _, _)| index)
            .ok_or_else(|| RegistryError::not_found(nickname))
    }

    /// Gibt den Snapshot zu einem Nickname zurück.
    pub fn get(&self, nickname: &str) -> Result<&Snapshot, RegistryError> {
        self.entries
            .get(nickname)
            .ok_or_else(|| RegistryError::not_found(nickname))
    }

    /// Position eines Nicknames in der Einfüge-Reihenfolge.
    pub fn position(&self, nickname: &str) -> Option<usize> {
        self.entries.get_index_of(nickname)
    }

    /// Prüft, ob ein Nickname registriert ist.
    pub fn contains(&self, nickname: &str) -> bool {
        self.entries.contains_key(nickname)
    }

    /// Alle Nicknames in Einfüge-Reihenfolge.
    ///
    /// Der Iterator ist lazy und klonbar (neu startbar) und verändert nichts.
    pub fn keys_in_order(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Gibt die Anzahl der Einträge zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt zurück ob die Registry leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
