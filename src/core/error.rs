//! Fehler-Taxonomie der Selektions-Registry.

use thiserror::Error;

/// Fehler aus Registry- und Controller-Operationen.
///
/// Keiner dieser Fehler ist fatal; die fehlgeschlagene Operation hinterlässt
/// Registry und sichtbare Liste unverändert.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Leerer Nickname an `put` übergeben.
    #[error("Ungültiges Argument: Nickname darf nicht leer sein")]
    InvalidArgument,
    /// Nickname ist nicht in der Registry vorhanden.
    #[error("Nickname nicht gefunden: '{nickname}'")]
    NotFound {
        /// Der gesuchte Nickname
        nickname: String,
    },
    /// Keine Zeile der sichtbaren Liste ist markiert.
    #[error("Kein Nickname ausgewählt")]
    NoSelection,
    /// Capture mit leerer Szenen-Selektion (Range nicht bildbar).
    #[error("Keine Elemente in der Szene selektiert")]
    EmptySelection,
    /// `RemoveAt`-Delta passt nicht zur sichtbaren Liste.
    #[error("Liste desynchronisiert: Index {index} bei {len} Einträgen")]
    ListDesync {
        /// Angeforderter Index
        index: usize,
        /// Tatsächliche Länge der Liste
        len: usize,
    },
}

impl RegistryError {
    /// Erstellt einen `NotFound`-Fehler für den angegebenen Nickname.
    pub fn not_found(nickname: impl Into<String>) -> Self {
        Self::NotFound {
            nickname: nickname.into(),
        }
    }
}
