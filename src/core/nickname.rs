//! Ableitung von Nicknames aus Label und Selektions-Range.

use super::{RegistryError, Snapshot};

/// Standard-Trenner zwischen erstem und letztem Element.
pub const DEFAULT_RANGE_SEPARATOR: &str = " : ";

/// Bildet den Nickname für einen Capture.
///
/// - leeres (oder nur aus Whitespace bestehendes) Label: `"<first> : <last>"`
/// - sonst: `"<label> [<first> : <last>]"`
///
/// Ein leerer Snapshot hat keine Range und wird mit `EmptySelection` abgelehnt.
pub fn derive_nickname(
    label: &str,
    snapshot: &Snapshot,
    separator: &str,
) -> Result<String, RegistryError> {
    let (Some(first), Some(last)) = (snapshot.first(), snapshot.last()) else {
        return Err(RegistryError::EmptySelection);
    };

    let range = format!("{first}{separator}{last}");

    // Whitespace zählt nur für die Leer-Prüfung, das Label bleibt unverändert.
    if label.trim().is_empty() {
        Ok(range)
    } else {
        Ok(format!("{label} [{range}]"))
    }
}
