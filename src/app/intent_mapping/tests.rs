use crate::app::{AppCommand, AppIntent, AppState, SelectionAction};
use crate::core::ReapplyMode;

use super::map_intent_to_commands;

#[test]
fn capture_requested_maps_to_capture_action_with_label() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CaptureRequested {
            label: "Foo".into(),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::RunSelectionAction {
            action: SelectionAction::Capture {
                label: "Foo".into()
            }
        }]
    );
}

#[test]
fn reapply_requested_uses_current_radio_mode() {
    let mut state = AppState::new();
    state.ui.mode = ReapplyMode::Remove;

    let commands = map_intent_to_commands(&state, AppIntent::ReapplyRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::RunSelectionAction {
            action: SelectionAction::Reapply {
                mode: ReapplyMode::Remove
            }
        }
    ));
}

#[test]
fn double_click_maps_to_highlight_then_reapply_in_order() {
    let mut state = AppState::new();
    state.ui.mode = ReapplyMode::Add;

    let commands = map_intent_to_commands(&state, AppIntent::ListEntryDoubleClicked { index: 2 });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::HighlightEntry { index: 2 }));
    assert!(matches!(
        commands[1],
        AppCommand::RunSelectionAction {
            action: SelectionAction::Reapply {
                mode: ReapplyMode::Add
            }
        }
    ));
}

#[test]
fn discard_requested_maps_to_discard_action() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::DiscardRequested);

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::RunSelectionAction {
            action: SelectionAction::Discard
        }]
    ));
}
