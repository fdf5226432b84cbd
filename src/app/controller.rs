//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{SceneHost, SelectionRegistry};

/// Orchestriert UI-Events gegen Fensterzustand, Session-Registry und Host-Szene.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        registry: &mut SelectionRegistry,
        host: &mut dyn SceneHost,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, registry, host, command)?;
        }

        Ok(())
    }

    /// Wie `handle_intent`, zeigt Fehler aber als blockierende Meldung an.
    ///
    /// Solange eine Meldung offen ist, wird nur deren Bestätigung verarbeitet.
    /// Gibt `false` zurück, wenn der Intent nicht ausgeführt wurde.
    pub fn dispatch(
        &mut self,
        state: &mut AppState,
        registry: &mut SelectionRegistry,
        host: &mut dyn SceneHost,
        intent: AppIntent,
    ) -> bool {
        if state.ui.notification.is_some() && !matches!(intent, AppIntent::NotificationDismissed)
        {
            log::debug!("Meldung offen, Intent verworfen: {:?}", intent);
            return false;
        }

        match self.handle_intent(state, registry, host, intent) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Aktion fehlgeschlagen: {:#}", e);
                state.ui.notify_error(&e);
                false
            }
        }
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        registry: &mut SelectionRegistry,
        host: &mut dyn SceneHost,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Registry ===
            AppCommand::RunSelectionAction { action } => {
                handlers::registry::run_action(state, registry, host, action)?
            }

            // === Liste & Fenster ===
            AppCommand::HighlightEntry { index } => handlers::view::highlight_entry(state, index),
            AppCommand::SetReapplyMode { mode } => handlers::view::set_reapply_mode(state, mode),
            AppCommand::CloseWindow => handlers::view::close_window(state),
            AppCommand::OpenWindow => handlers::view::open_window(state, registry),

            // === Dialoge ===
            AppCommand::DismissNotification => handlers::dialog::dismiss_notification(state),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
