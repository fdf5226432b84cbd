use crate::core::ReapplyMode;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// "Add Selection" geklickt oder Enter im Nickname-Feld
    CaptureRequested { label: String },
    /// Delete-Taste auf der Liste
    DiscardRequested,
    /// "Select" geklickt (Modus aus der Radio-Gruppe)
    ReapplyRequested,
    /// Listeneintrag angeklickt
    ListEntryClicked { index: usize },
    /// Listeneintrag doppelt angeklickt (markieren + anwenden)
    ListEntryDoubleClicked { index: usize },
    /// Radio-Gruppe geändert
    ReapplyModeChanged { mode: ReapplyMode },
    /// Blockierende Meldung bestätigt
    NotificationDismissed,
    /// Fenster schließen (Registry bleibt erhalten)
    CloseWindowRequested,
    /// Fenster (wieder) öffnen
    OpenWindowRequested,
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptionsRequested,
}
