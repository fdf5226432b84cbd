//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, SelectionAction};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let commands = match intent {
        AppIntent::CaptureRequested { label } => vec![AppCommand::RunSelectionAction {
            action: SelectionAction::Capture { label },
        }],
        AppIntent::DiscardRequested => vec![AppCommand::RunSelectionAction {
            action: SelectionAction::Discard,
        }],
        AppIntent::ReapplyRequested => vec![AppCommand::RunSelectionAction {
            action: SelectionAction::Reapply {
                mode: state.ui.mode,
            },
        }],
        AppIntent::ListEntryClicked { index } => vec![AppCommand::HighlightEntry { index }],
        AppIntent::ListEntryDoubleClicked { index } => vec![
            AppCommand::HighlightEntry { index },
            AppCommand::RunSelectionAction {
                action: SelectionAction::Reapply {
                    mode: state.ui.mode,
                },
            },
        ],
        AppIntent::ReapplyModeChanged { mode } => vec![AppCommand::SetReapplyMode { mode }],
        AppIntent::NotificationDismissed => vec![AppCommand::DismissNotification],
        AppIntent::CloseWindowRequested => vec![AppCommand::CloseWindow],
        AppIntent::OpenWindowRequested => vec![AppCommand::OpenWindow],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    };
    log::debug!("Intent gemappt auf {} Command(s)", commands.len());
    commands
}

#[cfg(test)]
mod tests;
