use crate::core::ReapplyMode;

/// Die drei Benutzer-Absichten gegenüber der Registry.
///
/// Die Anzeige leitet Gesten als `SelectionAction` weiter; Kontext
/// (markierter Nickname, Host-Szene) wird beim Dispatch mitgegeben.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Aktuelle Szenen-Selektion unter einem Nickname speichern
    Capture { label: String },
    /// Markierten Nickname verwerfen
    Discard,
    /// Markierten Snapshot mit Modus auf die Szene anwenden
    Reapply { mode: ReapplyMode },
}
