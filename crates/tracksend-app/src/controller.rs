//! Selection-state logic for the upload destination chooser
//!
//! The controller restores prior choices from the preference store, records
//! toggles, validates the final choice set, and persists it on
//! confirmation. It holds no mutable state of its own; the session layer
//! owns the [`SelectionState`] value.

use tracksend_core::prelude::*;
use tracksend_core::{ChooserDefaults, Destination, MapCreationMode, Outcome};

use crate::store::PreferenceStore;

/// In-memory snapshot of the chooser: one flag per destination plus the
/// map creation mode.
///
/// The mode is always well-defined, even while Maps is unselected; it is
/// simply ignored downstream in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub maps: bool,
    pub fusion_tables: bool,
    pub docs: bool,
    pub mode: MapCreationMode,
}

impl SelectionState {
    /// Read the flag for one destination.
    pub fn selected(&self, destination: Destination) -> bool {
        match destination {
            Destination::Maps => self.maps,
            Destination::FusionTables => self.fusion_tables,
            Destination::Docs => self.docs,
        }
    }

    fn set_selected(&mut self, destination: Destination, value: bool) {
        match destination {
            Destination::Maps => self.maps = value,
            Destination::FusionTables => self.fusion_tables = value,
            Destination::Docs => self.docs = value,
        }
    }

    /// True when at least one destination is selected.
    pub fn any_selected(&self) -> bool {
        Destination::ALL.iter().any(|d| self.selected(*d))
    }
}

/// Presentation hints derived from the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedView {
    /// Whether the new-vs-existing map sub-option group should be shown.
    pub show_map_options: bool,
}

/// Restores, mutates, validates, and persists the destination selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    defaults: ChooserDefaults,
}

impl SelectionController {
    pub fn new(defaults: ChooserDefaults) -> Self {
        Self { defaults }
    }

    /// Seed a fresh selection from the preference store.
    ///
    /// Absent keys are not failures: each destination falls back to its
    /// configured default, the mode to the configured default mode.
    pub fn initialize(&self, store: &dyn PreferenceStore) -> SelectionState {
        let pick_existing = store.get_bool(
            MapCreationMode::PREF_KEY,
            self.defaults.mode.picks_existing(),
        );

        SelectionState {
            maps: store.get_bool(
                Destination::Maps.pref_key(),
                self.defaults.destination(Destination::Maps),
            ),
            fusion_tables: store.get_bool(
                Destination::FusionTables.pref_key(),
                self.defaults.destination(Destination::FusionTables),
            ),
            docs: store.get_bool(
                Destination::Docs.pref_key(),
                self.defaults.destination(Destination::Docs),
            ),
            mode: MapCreationMode::from_pick_existing(pick_existing),
        }
    }

    /// Record a checkbox change and report the presentation consequences.
    ///
    /// The only inter-option coupling: the map sub-options are visible iff
    /// Maps is selected. Deselecting Maps does not reset the remembered
    /// creation mode.
    pub fn toggle(
        &self,
        state: &mut SelectionState,
        destination: Destination,
        selected: bool,
    ) -> DerivedView {
        state.set_selected(destination, selected);
        self.derived_view(state)
    }

    /// Record the new-vs-existing choice.
    pub fn set_mode(&self, state: &mut SelectionState, mode: MapCreationMode) {
        state.mode = mode;
    }

    /// The same visibility computation as [`SelectionController::toggle`],
    /// without mutating, so the renderer can derive the initial view right
    /// after [`SelectionController::initialize`].
    pub fn derived_view(&self, state: &SelectionState) -> DerivedView {
        DerivedView {
            show_map_options: state.selected(Destination::Maps),
        }
    }

    /// A selection is confirmable iff at least one destination is checked.
    pub fn validate(&self, state: &SelectionState) -> Result<()> {
        if state.any_selected() {
            Ok(())
        } else {
            Err(Error::NoDestinationSelected)
        }
    }

    /// Validate, persist, and produce the outcome for the next stage.
    ///
    /// On validation failure nothing is written. Writes are independent
    /// key-value sets with no cross-key atomicity.
    pub fn confirm(
        &self,
        state: &SelectionState,
        store: &mut dyn PreferenceStore,
    ) -> Result<Outcome> {
        self.validate(state)?;

        store.set_bool(MapCreationMode::PREF_KEY, state.mode.picks_existing());
        for destination in Destination::ALL {
            store.set_bool(destination.pref_key(), state.selected(destination));
        }

        debug!(
            maps = state.maps,
            fusion_tables = state.fusion_tables,
            docs = state.docs,
            pick_existing = state.mode.picks_existing(),
            "Confirmed destination selection"
        );

        Ok(Outcome {
            maps: state.maps,
            fusion_tables: state.fusion_tables,
            docs: state.docs,
            new_map: state.mode == MapCreationMode::New,
        })
    }
}
