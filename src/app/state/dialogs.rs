use crate::core::{ReapplyMode, RegistryError};

/// Blockierende Meldung nach einer fehlgeschlagenen Aktion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Fenstertitel
    pub title: String,
    /// Beschreibender Text
    pub message: String,
    /// Invariantenverletzung (Registry/Liste desynchronisiert)
    pub is_internal: bool,
}

impl Notification {
    /// Leitet Titel und Text aus einem Fehler ab.
    pub fn from_error(error: &anyhow::Error) -> Self {
        let (title, is_internal) = match error.downcast_ref::<RegistryError>() {
            Some(RegistryError::NoSelection) => ("Keine Auswahl", false),
            Some(RegistryError::EmptySelection) => ("Leere Selektion", false),
            Some(RegistryError::InvalidArgument) => ("Ungültiger Nickname", false),
            Some(RegistryError::NotFound { .. } | RegistryError::ListDesync { .. }) => {
                ("Interner Fehler", true)
            }
            None => ("Fehler", false),
        };
        Self {
            title: title.to_string(),
            message: format!("{error:#}"),
            is_internal,
        }
    }
}

/// UI-bezogener Zustand des History-Fensters
pub struct UiState {
    /// Inhalt des Nickname-Eingabefelds
    pub nickname_input: String,
    /// Gewählter Reapply-Modus (Radio-Gruppe)
    pub mode: ReapplyMode,
    /// Offene blockierende Meldung
    pub notification: Option<Notification>,
    /// Ob das Fenster angezeigt wird
    pub window_open: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand mit vorausgewähltem Modus.
    pub fn new(mode: ReapplyMode) -> Self {
        Self {
            nickname_input: String::new(),
            mode,
            notification: None,
            window_open: true,
        }
    }

    /// Zeigt eine blockierende Meldung für den Fehler an.
    pub fn notify_error(&mut self, error: &anyhow::Error) {
        self.notification = Some(Notification::from_error(error));
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ReapplyMode::default())
    }
}
