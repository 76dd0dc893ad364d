//! The caller-owned carrier forwarded through the send flow

use serde::{Deserialize, Serialize};

use crate::types::Outcome;

/// Identifies the track being sent and accumulates the choices made at each
/// stage of the multi-step flow.
///
/// Created by the caller, annotated by the chooser with the confirmed
/// selection, then handed to the account-selection stage. Ownership passes
/// along the chain; the request is never shared. Serializable because
/// embedders move it across process or screen boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    /// The track to upload.
    pub track_id: i64,
    pub send_maps: bool,
    pub send_fusion_tables: bool,
    pub send_docs: bool,
    pub new_map: bool,
}

impl SendRequest {
    /// A fresh request for one track, with no destinations chosen yet.
    pub fn new(track_id: i64) -> Self {
        Self {
            track_id,
            send_maps: false,
            send_fusion_tables: false,
            send_docs: false,
            new_map: true,
        }
    }

    /// Copy the confirmed selection onto the request.
    pub fn apply(&mut self, outcome: &Outcome) {
        self.send_maps = outcome.maps;
        self.send_fusion_tables = outcome.fusion_tables;
        self.send_docs = outcome.docs;
        self.new_map = outcome.new_map;
    }
}
