//! Domain types for the upload destination chooser

use serde::{Deserialize, Serialize};

/// A service a recorded track can be uploaded to.
///
/// The set is fixed and closed; [`Destination::ALL`] gives the canonical
/// order used for persistence and analytics alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Maps,
    FusionTables,
    Docs,
}

impl Destination {
    /// Canonical iteration order.
    pub const ALL: [Destination; 3] = [
        Destination::Maps,
        Destination::FusionTables,
        Destination::Docs,
    ];

    /// Preference-store key for this destination's selected flag.
    ///
    /// Keys are fixed; the chooser never invents keys at runtime.
    pub fn pref_key(self) -> &'static str {
        match self {
            Destination::Maps => "send_to_maps",
            Destination::FusionTables => "send_to_fusion_tables",
            Destination::Docs => "send_to_docs",
        }
    }

    /// Analytics page tag recorded when this destination is part of a
    /// confirmed send.
    pub fn page_view(self) -> &'static str {
        match self {
            Destination::Maps => "/send/maps",
            Destination::FusionTables => "/send/fusion_tables",
            Destination::Docs => "/send/docs",
        }
    }
}

/// Whether a map upload creates a new map or merges into an existing one.
///
/// Only meaningful while [`Destination::Maps`] is selected, but always
/// well-defined: deselecting Maps does not reset the remembered choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapCreationMode {
    #[default]
    New,
    Existing,
}

impl MapCreationMode {
    /// Preference-store key. The persisted representation is a
    /// "pick existing map" boolean.
    pub const PREF_KEY: &'static str = "pick_existing_map";

    pub fn from_pick_existing(pick_existing: bool) -> Self {
        if pick_existing {
            MapCreationMode::Existing
        } else {
            MapCreationMode::New
        }
    }

    pub fn picks_existing(self) -> bool {
        matches!(self, MapCreationMode::Existing)
    }
}

/// Per-destination default flags plus the default creation mode, used to
/// seed a fresh chooser session when the preference store has no prior
/// choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooserDefaults {
    pub maps: bool,
    pub fusion_tables: bool,
    pub docs: bool,
    pub mode: MapCreationMode,
}

impl ChooserDefaults {
    /// Default flag for one destination.
    pub fn destination(&self, destination: Destination) -> bool {
        match destination {
            Destination::Maps => self.maps,
            Destination::FusionTables => self.fusion_tables,
            Destination::Docs => self.docs,
        }
    }
}

impl Default for ChooserDefaults {
    fn default() -> Self {
        Self {
            maps: true,
            fusion_tables: true,
            docs: true,
            mode: MapCreationMode::New,
        }
    }
}

/// The confirmed selection handed to the next stage of the send flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub maps: bool,
    pub fusion_tables: bool,
    pub docs: bool,
    /// True when a new map should be created rather than merging into an
    /// existing one.
    pub new_map: bool,
}

impl Outcome {
    /// Whether one destination is part of the confirmed selection.
    pub fn selected(&self, destination: Destination) -> bool {
        match destination {
            Destination::Maps => self.maps,
            Destination::FusionTables => self.fusion_tables,
            Destination::Docs => self.docs,
        }
    }
}
