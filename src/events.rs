use crate::geocode::SearchResult;
use serde::{Deserialize, Serialize};

/// Triggers for view-state recomputation.
///
/// The crate holds no event loop: the embedding UI observes its own search
/// form, autocomplete widget, and window, and forwards these as explicit
/// calls into [`PinMap::handle_event`](crate::PinMap::handle_event).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The search form was submitted and the query geocoded
    SearchSubmitted { result: SearchResult },
    /// An autocomplete suggestion was picked and resolved
    PlaceSelected { result: SearchResult },
    /// The viewport changed size; recenter from the dataset alone
    ViewportResized,
}

impl MapEvent {
    /// The search result carried by the event, if any
    pub fn search_result(&self) -> Option<&SearchResult> {
        match self {
            Self::SearchSubmitted { result } | Self::PlaceSelected { result } => Some(result),
            Self::ViewportResized => None,
        }
    }
}
