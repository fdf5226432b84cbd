use crate::app::{CommandLog, VisibleList};
use crate::core::SelectionRegistry;
use crate::shared::HistoryOptions;

use super::UiState;

/// Zustand eines geöffneten History-Fensters
pub struct AppState {
    /// Sichtbare Nickname-Liste (spiegelt die Registry-Reihenfolge)
    pub list: VisibleList,
    /// UI-State (Eingabefeld, Modus, Meldungen)
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Fenstergröße, Trenner, Farben)
    pub options: HistoryOptions,
}

impl AppState {
    /// Erstellt einen leeren Fensterzustand mit Standardoptionen.
    pub fn new() -> Self {
        Self::open(&SelectionRegistry::new(), HistoryOptions::default())
    }

    /// Öffnet das Fenster über einer bestehenden Registry.
    ///
    /// Alle vorhandenen Nicknames erscheinen in Registry-Reihenfolge.
    pub fn open(registry: &SelectionRegistry, options: HistoryOptions) -> Self {
        Self {
            list: VisibleList::from_registry(registry),
            ui: UiState::new(options.default_mode),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Baut Liste und Fensterzustand nach erneutem Öffnen neu auf.
    ///
    /// Die Registry wird nur gelesen, nie zurückgesetzt.
    pub fn reopen(&mut self, registry: &SelectionRegistry) {
        self.list = VisibleList::from_registry(registry);
        self.ui = UiState::new(self.options.default_mode);
        self.ui.window_open = true;
    }

    /// Nickname der markierten Listenzeile.
    pub fn selected_nickname(&self) -> Option<&str> {
        self.list.selected_nickname()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
