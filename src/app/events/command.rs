use super::SelectionAction;
use crate::core::ReapplyMode;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Registry-Aktion gegen die markierte Zeile ausführen
    RunSelectionAction { action: SelectionAction },
    /// Listeneintrag markieren
    HighlightEntry { index: usize },
    /// Reapply-Modus setzen
    SetReapplyMode { mode: ReapplyMode },
    /// Blockierende Meldung schließen
    DismissNotification,
    /// Fenster schließen
    CloseWindow,
    /// Fenster öffnen und Liste aus der Registry aufbauen
    OpenWindow,
    /// Optionen zurücksetzen
    ResetOptions,
}
