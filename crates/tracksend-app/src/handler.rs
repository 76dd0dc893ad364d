//! Update function for the chooser session (TEA pattern)
//!
//! The presentation layer feeds [`ChooserMessage`]s in and performs the
//! returned [`ChooserAction`]s in order. The preference store is passed in
//! because only the present and confirm paths touch it.

use tracksend_core::prelude::*;
use tracksend_core::SendRequest;

use crate::analytics::page_views;
use crate::message::ChooserMessage;
use crate::state::{ChooserPhase, ChooserState};
use crate::store::PreferenceStore;

/// Notice shown when the user confirms with nothing selected.
pub const NO_SERVICE_NOTICE: &str = "Please select at least one service";

/// Effects the embedding front-end performs after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooserAction {
    /// Record page views against the analytics sink.
    RecordPageViews { pages: Vec<&'static str> },

    /// Forward the annotated request to the account-selection stage and
    /// tear the chooser down.
    HandOff { request: SendRequest },
}

/// Result of processing one message: zero or more ordered actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateResult {
    pub actions: Vec<ChooserAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn actions(actions: Vec<ChooserAction>) -> Self {
        Self { actions }
    }
}

/// Process a message and update the session state.
///
/// Messages that do not apply to the current phase are ignored; the two
/// terminal phases accept nothing.
pub fn update(
    state: &mut ChooserState,
    store: &mut dyn PreferenceStore,
    message: ChooserMessage,
) -> UpdateResult {
    match (state.phase, message) {
        (ChooserPhase::Uninitialized, ChooserMessage::Present) => {
            state.selection = Some(state.controller.initialize(store));
            state.phase = ChooserPhase::Presenting;
            debug!("Chooser presented");
            UpdateResult::none()
        }

        (
            ChooserPhase::Presenting,
            ChooserMessage::ToggleDestination {
                destination,
                selected,
            },
        ) => {
            state.notice = None;
            if let Some(selection) = state.selection.as_mut() {
                state.controller.toggle(selection, destination, selected);
            }
            UpdateResult::none()
        }

        (ChooserPhase::Presenting, ChooserMessage::SetMapMode { mode }) => {
            state.notice = None;
            if let Some(selection) = state.selection.as_mut() {
                state.controller.set_mode(selection, mode);
            }
            UpdateResult::none()
        }

        (ChooserPhase::Presenting, ChooserMessage::Confirm) => {
            state.notice = None;
            let Some(selection) = state.selection.as_ref() else {
                return UpdateResult::none();
            };
            match state.controller.confirm(selection, store) {
                Ok(outcome) => {
                    state.phase = ChooserPhase::Confirmed;
                    // Stats before hand-off, both exactly once.
                    let mut actions = vec![ChooserAction::RecordPageViews {
                        pages: page_views(&outcome),
                    }];
                    if let Some(mut request) = state.request.take() {
                        request.apply(&outcome);
                        actions.push(ChooserAction::HandOff { request });
                    }
                    info!("Destination selection confirmed");
                    UpdateResult::actions(actions)
                }
                Err(err) => {
                    // Stay presenting; the front-end surfaces the notice
                    // and is expected to cancel.
                    warn!("Confirmation rejected: {}", err);
                    state.notice = Some(NO_SERVICE_NOTICE.to_string());
                    UpdateResult::none()
                }
            }
        }

        (ChooserPhase::Presenting, ChooserMessage::Cancel) => {
            state.selection = None;
            state.request = None;
            state.phase = ChooserPhase::Cancelled;
            debug!("Chooser cancelled, selection discarded");
            UpdateResult::none()
        }

        (phase, message) => {
            debug!(?phase, ?message, "Message ignored in current phase");
            UpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPreferenceStore;
    use tracksend_core::{ChooserDefaults, Destination, MapCreationMode};

    fn presented(store: &mut MemoryPreferenceStore) -> ChooserState {
        let mut state = ChooserState::new(ChooserDefaults::default(), SendRequest::new(1));
        update(&mut state, store, ChooserMessage::Present);
        state
    }

    #[test]
    fn test_present_seeds_selection_and_enters_presenting() {
        let mut store = MemoryPreferenceStore::new();
        let state = presented(&mut store);

        assert_eq!(state.phase, ChooserPhase::Presenting);
        let selection = state.selection.unwrap();
        assert!(selection.maps && selection.fusion_tables && selection.docs);
        assert_eq!(selection.mode, MapCreationMode::New);
        assert_eq!(
            state.derived_view().map(|v| v.show_map_options),
            Some(true)
        );
    }

    #[test]
    fn test_messages_before_present_are_ignored() {
        let mut store = MemoryPreferenceStore::new();
        let mut state = ChooserState::new(ChooserDefaults::default(), SendRequest::new(1));

        let result = update(&mut state, &mut store, ChooserMessage::Confirm);
        assert!(result.actions.is_empty());
        assert_eq!(state.phase, ChooserPhase::Uninitialized);
        assert!(state.selection.is_none());
    }

    #[test]
    fn test_toggle_and_set_mode_are_self_transitions() {
        let mut store = MemoryPreferenceStore::new();
        let mut state = presented(&mut store);

        update(
            &mut state,
            &mut store,
            ChooserMessage::ToggleDestination {
                destination: Destination::Maps,
                selected: false,
            },
        );
        update(
            &mut state,
            &mut store,
            ChooserMessage::SetMapMode {
                mode: MapCreationMode::Existing,
            },
        );

        assert_eq!(state.phase, ChooserPhase::Presenting);
        let selection = state.selection.unwrap();
        assert!(!selection.maps);
        assert_eq!(selection.mode, MapCreationMode::Existing);
        // Nothing persisted by toggling
        assert!(store.is_empty());
    }

    #[test]
    fn test_confirm_emits_stats_then_handoff() {
        let mut store = MemoryPreferenceStore::new();
        let mut state = presented(&mut store);
        update(
            &mut state,
            &mut store,
            ChooserMessage::ToggleDestination {
                destination: Destination::FusionTables,
                selected: false,
            },
        );

        let result = update(&mut state, &mut store, ChooserMessage::Confirm);

        assert_eq!(state.phase, ChooserPhase::Confirmed);
        assert_eq!(result.actions.len(), 2);
        assert_eq!(
            result.actions[0],
            ChooserAction::RecordPageViews {
                pages: vec!["/send/maps", "/send/docs"],
            }
        );
        match &result.actions[1] {
            ChooserAction::HandOff { request } => {
                assert_eq!(request.track_id, 1);
                assert!(request.send_maps);
                assert!(!request.send_fusion_tables);
                assert!(request.send_docs);
                assert!(request.new_map);
            }
            other => panic!("expected HandOff, got {:?}", other),
        }
        // Request ownership moved into the action
        assert!(state.request.is_none());
    }

    #[test]
    fn test_confirm_empty_selection_sets_notice_and_stays() {
        let mut store = MemoryPreferenceStore::new();
        let mut state = presented(&mut store);
        for destination in Destination::ALL {
            update(
                &mut state,
                &mut store,
                ChooserMessage::ToggleDestination {
                    destination,
                    selected: false,
                },
            );
        }

        let result = update(&mut state, &mut store, ChooserMessage::Confirm);

        assert!(result.actions.is_empty());
        assert_eq!(state.phase, ChooserPhase::Presenting);
        assert_eq!(state.notice.as_deref(), Some(NO_SERVICE_NOTICE));
        assert!(state.request.is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_notice_cleared_when_session_continues() {
        let mut store = MemoryPreferenceStore::new();
        let mut state = presented(&mut store);
        for destination in Destination::ALL {
            update(
                &mut state,
                &mut store,
                ChooserMessage::ToggleDestination {
                    destination,
                    selected: false,
                },
            );
        }

        update(&mut state, &mut store, ChooserMessage::Confirm);
        assert_eq!(state.notice.as_deref(), Some(NO_SERVICE_NOTICE));

        // A front-end that keeps the session alive must not show a stale
        // notice after the next interaction
        update(
            &mut state,
            &mut store,
            ChooserMessage::ToggleDestination {
                destination: Destination::Maps,
                selected: true,
            },
        );
        assert!(state.notice.is_none());

        let result = update(&mut state, &mut store, ChooserMessage::Confirm);
        assert_eq!(state.phase, ChooserPhase::Confirmed);
        assert!(state.notice.is_none());
        assert_eq!(result.actions.len(), 2);
    }

    #[test]
    fn test_cancel_discards_without_persisting() {
        let mut store = MemoryPreferenceStore::new();
        let mut state = presented(&mut store);
        update(
            &mut state,
            &mut store,
            ChooserMessage::ToggleDestination {
                destination: Destination::Docs,
                selected: false,
            },
        );

        let result = update(&mut state, &mut store, ChooserMessage::Cancel);

        assert!(result.actions.is_empty());
        assert_eq!(state.phase, ChooserPhase::Cancelled);
        assert!(state.selection.is_none());
        assert!(state.request.is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_terminal_phases_ignore_all_messages() {
        let mut store = MemoryPreferenceStore::new();
        let mut state = presented(&mut store);
        update(&mut state, &mut store, ChooserMessage::Cancel);

        for message in [
            ChooserMessage::Present,
            ChooserMessage::ToggleDestination {
                destination: Destination::Maps,
                selected: true,
            },
            ChooserMessage::Confirm,
            ChooserMessage::Cancel,
        ] {
            let result = update(&mut state, &mut store, message);
            assert!(result.actions.is_empty());
            assert_eq!(state.phase, ChooserPhase::Cancelled);
        }
    }

    #[test]
    fn test_handoff_happens_exactly_once() {
        let mut store = MemoryPreferenceStore::new();
        let mut state = presented(&mut store);

        let first = update(&mut state, &mut store, ChooserMessage::Confirm);
        assert_eq!(first.actions.len(), 2);

        // Confirmed is terminal; a stray second confirm emits nothing
        let second = update(&mut state, &mut store, ChooserMessage::Confirm);
        assert!(second.actions.is_empty());
    }
}
