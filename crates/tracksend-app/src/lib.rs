//! tracksend-app - Selection state and orchestration for the upload
//! destination chooser
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! chooser session: [`ChooserState`] holds the session, the presentation
//! layer feeds [`ChooserMessage`]s into [`update`], and performs the
//! returned [`ChooserAction`]s (recording analytics page views, handing the
//! annotated [`tracksend_core::SendRequest`] to the next stage).
//!
//! The selection logic itself lives in [`controller::SelectionController`];
//! persistence goes through the [`store::PreferenceStore`] seam.

pub mod analytics;
pub mod controller;
pub mod handler;
pub mod message;
pub mod state;
pub mod store;

// Re-export primary types
pub use analytics::{page_views, AnalyticsSink};
pub use controller::{DerivedView, SelectionController, SelectionState};
pub use handler::{update, ChooserAction, UpdateResult};
pub use message::ChooserMessage;
pub use state::{ChooserPhase, ChooserState};
pub use store::{MemoryPreferenceStore, PreferenceStore, TomlPreferenceStore};
