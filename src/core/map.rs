//! The per-instance map controller
//!
//! [`PinMap`] ties one dataset and one configuration to the reconciler and
//! tracks the last good view state. Each embedded map pane owns its own
//! instance.

use crate::core::config::PinMapOptions;
use crate::core::reconcile::{MapReconciler, MapViewState};
use crate::data::MarkerSet;
use crate::events::MapEvent;
use crate::Result;

/// Controller for one embedded map pane
#[derive(Debug, Clone)]
pub struct PinMap {
    markers: MarkerSet,
    reconciler: MapReconciler,
    state: MapViewState,
}

impl PinMap {
    /// Creates the controller and computes the initial view from the
    /// dataset alone
    pub fn new(markers: MarkerSet, options: PinMapOptions) -> Result<Self> {
        let reconciler = MapReconciler::new(options);
        let state = reconciler.reconcile(markers.records(), None, 0.0)?;

        Ok(Self {
            markers,
            reconciler,
            state,
        })
    }

    /// The marker dataset, immutable for the page view
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn options(&self) -> &PinMapOptions {
        self.reconciler.options()
    }

    /// The current view state for the surface adapter to apply
    pub fn view_state(&self) -> &MapViewState {
        &self.state
    }

    /// Recomputes the view for a caller-observed event.
    ///
    /// Search events filter with the configured radius. A resize recenters
    /// from the markers alone. When reconciliation fails (malformed search
    /// geometry), the previous view state stays in place and the error is
    /// returned, so the surface keeps showing the last good view.
    pub fn handle_event(&mut self, event: &MapEvent) -> Result<&MapViewState> {
        let radius_km = self.reconciler.options().search_radius_km;

        let next = match event.search_result() {
            Some(result) => {
                self.reconciler
                    .reconcile(self.markers.records(), Some(result), radius_km)
            }
            None => self.reconciler.reconcile(self.markers.records(), None, 0.0),
        }?;

        self.state = next;
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{LatLng, WORLD_CENTER};
    use crate::core::reconcile::ZoomDirective;
    use crate::data::MarkerRecord;
    use crate::geocode::SearchResult;

    fn dataset() -> MarkerSet {
        MarkerSet::new(vec![
            MarkerRecord::new("near", LatLng::new(10.0, 10.0)),
            MarkerRecord::new("far", LatLng::new(10.0, 20.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state_from_dataset() {
        let map = PinMap::new(dataset(), PinMapOptions::default()).unwrap();

        assert_eq!(map.view_state().center, WORLD_CENTER);
        assert_eq!(map.view_state().in_scope.len(), 2);
    }

    #[test]
    fn test_search_event_filters_by_radius() {
        let options = PinMapOptions::default().with_search_radius_km(5.0);
        let mut map = PinMap::new(dataset(), options).unwrap();

        let event = MapEvent::PlaceSelected {
            result: SearchResult::at(LatLng::new(10.0, 10.01)),
        };
        let state = map.handle_event(&event).unwrap();

        assert_eq!(state.in_scope, vec!["near".to_string()]);
        assert!(state.radius_matched);
    }

    #[test]
    fn test_resize_recomputes_without_search() {
        let options = PinMapOptions::default().with_search_radius_km(5.0);
        let mut map = PinMap::new(dataset(), options).unwrap();

        map.handle_event(&MapEvent::PlaceSelected {
            result: SearchResult::at(LatLng::new(10.0, 10.01)),
        })
        .unwrap();

        let state = map.handle_event(&MapEvent::ViewportResized).unwrap();
        assert_eq!(state.in_scope.len(), 2);
        assert!(!state.radius_matched);
    }

    #[test]
    fn test_failed_search_keeps_previous_state() {
        let mut map = PinMap::new(dataset(), PinMapOptions::default()).unwrap();
        let before = map.view_state().clone();

        let event = MapEvent::SearchSubmitted {
            result: SearchResult::default(),
        };
        assert!(map.handle_event(&event).is_err());
        assert_eq!(map.view_state(), &before);
    }

    #[test]
    fn test_single_marker_initial_view() {
        let markers =
            MarkerSet::new(vec![MarkerRecord::new("only", LatLng::new(48.85, 2.35))]).unwrap();
        let map = PinMap::new(markers, PinMapOptions::default()).unwrap();

        assert_eq!(map.view_state().center, LatLng::new(48.85, 2.35));
        assert_eq!(map.view_state().zoom, ZoomDirective::Fixed(11.0));
    }
}
