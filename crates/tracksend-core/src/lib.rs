//! # tracksend-core - Core Domain Types
//!
//! Foundation crate for tracksend. Provides the domain types of the upload
//! destination chooser, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Destination`] - One of the fixed set of services a track can be sent to
//! - [`MapCreationMode`] - Whether a map upload creates a new map or reuses one
//! - [`ChooserDefaults`] - Per-destination default flags used to seed a session
//! - [`Outcome`] - The confirmed selection handed to the next stage
//!
//! ### Request Carrier (`request`)
//! - [`SendRequest`] - Caller-owned carrier annotated with the confirmed
//!   selection and forwarded to the account-selection stage
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a recoverability classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tracksend_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod request;
pub mod types;

/// Prelude for common imports used throughout all tracksend crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use request::SendRequest;
pub use types::{ChooserDefaults, Destination, MapCreationMode, Outcome};
