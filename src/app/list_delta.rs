//! Minimale Änderungsanweisungen für die sichtbare Nickname-Liste.

/// Delta, das die Anzeige auf ihre Liste anwenden muss.
///
/// Während des normalen Betriebs wird die Liste nur über diese Deltas
/// verändert, nie vollständig neu synchronisiert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDelta {
    /// Nickname am Ende anhängen
    Append(String),
    /// Eintrag an Index entfernen
    RemoveAt(usize),
}
