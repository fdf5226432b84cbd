//! Schnittstellen zum Host: Lesen und Setzen der Live-Selektion.
//!
//! Die Mengen-Arithmetik (Vereinigung/Differenz) gehört dem Host; der Kern
//! liefert nur Snapshot und Modus.

use super::{Element, Snapshot};
use serde::{Deserialize, Serialize};

/// Kombinationsmodus beim erneuten Anwenden eines Snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReapplyMode {
    /// Szenen-Selektion leeren und auf den Snapshot setzen
    #[default]
    Replace,
    /// Snapshot zur Szenen-Selektion hinzufügen
    Add,
    /// Snapshot aus der Szenen-Selektion entfernen
    Remove,
}

impl ReapplyMode {
    /// Alle Modi in Anzeige-Reihenfolge (Radio-Gruppe).
    pub const ALL: [ReapplyMode; 3] = [Self::Replace, Self::Add, Self::Remove];

    /// Anzeigename für die Radio-Gruppe.
    pub fn label(self) -> &'static str {
        match self {
            Self::Replace => "Single",
            Self::Add => "Add",
            Self::Remove => "Remove",
        }
    }
}

/// Liefert die aktuelle Live-Selektion des Hosts (Capture-Quelle).
pub trait SelectionSource {
    /// Liest die Selektion in Host-Reihenfolge (flach, ein Element je Eintrag).
    fn current_selection(&self) -> Vec<Element>;
}

/// Setzt die Live-Selektion des Hosts (Reapply-Ziel).
pub trait SelectionSink {
    /// Kombiniert `snapshot` gemäß `mode` mit der Live-Selektion.
    fn apply_selection(&mut self, snapshot: &Snapshot, mode: ReapplyMode);
}

/// Host, der sowohl Quelle als auch Ziel der Selektion ist.
pub trait SceneHost: SelectionSource + SelectionSink {}

impl<T: SelectionSource + SelectionSink> SceneHost for T {}
