//! Chooser session state (TEA pattern)

use tracksend_core::{ChooserDefaults, SendRequest};

use crate::controller::{DerivedView, SelectionController, SelectionState};

/// Lifecycle of one chooser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserPhase {
    /// Created but not yet presented.
    Uninitialized,
    /// On screen, accepting toggles.
    Presenting,
    /// Dismissed without confirming. Terminal.
    Cancelled,
    /// Confirmed and handed off. Terminal.
    Confirmed,
}

impl ChooserPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, ChooserPhase::Cancelled | ChooserPhase::Confirmed)
    }
}

/// State for one presentation of the destination chooser.
///
/// Created fresh each time the chooser is shown; never reused after a
/// terminal phase.
#[derive(Debug, Clone)]
pub struct ChooserState {
    pub controller: SelectionController,
    pub phase: ChooserPhase,
    /// Populated on `Present`, discarded on cancel.
    pub selection: Option<SelectionState>,
    /// Owned until the confirmed hand-off takes it, or dropped on cancel.
    pub request: Option<SendRequest>,
    /// Transient user-visible message, set when confirmation is rejected
    /// and cleared by the next message handled while presenting.
    pub notice: Option<String>,
}

impl ChooserState {
    pub fn new(defaults: ChooserDefaults, request: SendRequest) -> Self {
        Self {
            controller: SelectionController::new(defaults),
            phase: ChooserPhase::Uninitialized,
            selection: None,
            request: Some(request),
            notice: None,
        }
    }

    /// Presentation hints for the renderer; `None` unless presenting.
    pub fn derived_view(&self) -> Option<DerivedView> {
        self.selection
            .as_ref()
            .map(|selection| self.controller.derived_view(selection))
    }
}
