//! Message types for the chooser session (TEA pattern)

use tracksend_core::{Destination, MapCreationMode};

/// Events the presentation layer feeds into [`crate::handler::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserMessage {
    /// Show the chooser, seeding the selection from stored preferences.
    Present,

    /// A destination checkbox changed.
    ToggleDestination {
        destination: Destination,
        selected: bool,
    },

    /// The new-vs-existing radio group changed.
    SetMapMode { mode: MapCreationMode },

    /// The user pressed send.
    Confirm,

    /// The user dismissed the chooser.
    Cancel,
}
