//! Analytics seam for the chooser
//!
//! The chooser records one page view per selected destination after a
//! confirmed send. Transport is the embedder's concern; this module only
//! computes the tags and names the sink interface.

use tracksend_core::{Destination, Outcome};

/// Process-wide sink confirmed page views are recorded against.
///
/// Invoked exactly once per chooser session, after a successful confirm,
/// with the output of [`page_views`].
pub trait AnalyticsSink {
    fn send_page_views(&mut self, pages: &[&str]);
}

/// Page tags for a confirmed outcome, one per selected destination, in the
/// canonical Maps, FusionTables, Docs order.
///
/// The outcome already reflects the confirmed selection, so the result is
/// independent of the order choices were toggled during the session. On the
/// confirmed path it is always non-empty.
pub fn page_views(outcome: &Outcome) -> Vec<&'static str> {
    Destination::ALL
        .iter()
        .filter(|destination| outcome.selected(**destination))
        .map(|destination| destination.page_view())
        .collect()
}
