//! Map view-state reconciliation
//!
//! [`MapReconciler::reconcile`] is the single decision point of the crate:
//! given the marker dataset and an optional resolved search, it computes the
//! next [`MapViewState`]. It is a pure function of its inputs and the
//! per-instance options; applying the state to a drawing surface is the
//! adapter's job.

use crate::core::config::PinMapOptions;
use crate::core::geo::{CircleRegion, LatLng, LatLngBounds};
use crate::data::MarkerRecord;
use crate::geocode::SearchResult;
use crate::Result;
use serde::{Deserialize, Serialize};

/// How the surface should set its zoom after recentering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZoomDirective {
    /// Set a fixed zoom level
    Fixed(f64),
    /// Auto-zoom/pan so all given coordinates are visible
    FitBounds(LatLngBounds),
}

/// The computed next view of the map.
///
/// Recomputed fresh on every triggering event; holds no history and owns
/// nothing beyond its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewState {
    pub center: LatLng,
    pub zoom: ZoomDirective,
    /// Identifiers of the markers in scope, in dataset order. Either all
    /// markers or exactly the subset inside the active radius.
    pub in_scope: Vec<String>,
    /// Whether `in_scope` came from a non-empty radius match
    pub radius_matched: bool,
    /// The containment region that was active, for the surface to draw
    pub region: Option<CircleRegion>,
}

impl MapViewState {
    fn world_view(options: &PinMapOptions) -> Self {
        Self {
            center: options.world_center,
            zoom: ZoomDirective::Fixed(options.world_zoom),
            in_scope: Vec::new(),
            radius_matched: false,
            region: None,
        }
    }
}

/// Computes view states for one map instance
#[derive(Debug, Clone, Default)]
pub struct MapReconciler {
    options: PinMapOptions,
}

impl MapReconciler {
    pub fn new(options: PinMapOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PinMapOptions {
        &self.options
    }

    /// Decides the next view for the given dataset and search state.
    ///
    /// `radius_km` builds the containment circle around the searched point;
    /// zero (or anything non-positive) disables radius filtering. A search
    /// result without usable geometry fails with
    /// [`MapError::InvalidSearchResult`](crate::MapError::InvalidSearchResult)
    /// and no state is produced, so callers keep the previous view.
    pub fn reconcile(
        &self,
        markers: &[MarkerRecord],
        search: Option<&SearchResult>,
        radius_km: f64,
    ) -> Result<MapViewState> {
        // Validate up front: a malformed search must not yield partial state.
        let searched = match search {
            Some(result) => Some((result.location()?, result.viewport.as_ref())),
            None => None,
        };
        let radius_km = PinMapOptions::normalize_radius_km(radius_km);

        let effective = markers.len() + usize::from(searched.is_some());

        match effective {
            // Nothing to show: neutral world view instead of a garbage center.
            0 => Ok(MapViewState::world_view(&self.options)),

            1 => Ok(self.reconcile_single(markers, searched.map(|(loc, _)| loc))),

            _ => self.reconcile_many(markers, searched, radius_km),
        }
    }

    /// One entity total: either a lone search hit or a lone marker.
    fn reconcile_single(&self, markers: &[MarkerRecord], searched: Option<LatLng>) -> MapViewState {
        match searched {
            // A search with an empty dataset centers on the hit. The world
            // zoom here is long-standing behavior; opt into
            // `localize_single_search` to zoom in instead.
            Some(location) => {
                let zoom = if self.options.localize_single_search {
                    self.options.neighborhood_zoom
                } else {
                    self.options.world_zoom
                };
                MapViewState {
                    center: location,
                    zoom: ZoomDirective::Fixed(zoom),
                    in_scope: Vec::new(),
                    radius_matched: false,
                    region: None,
                }
            }
            None => MapViewState {
                center: markers[0].coords,
                zoom: ZoomDirective::Fixed(self.options.neighborhood_zoom),
                in_scope: vec![markers[0].entity_id.clone()],
                radius_matched: false,
                region: None,
            },
        }
    }

    fn reconcile_many(
        &self,
        markers: &[MarkerRecord],
        searched: Option<(LatLng, Option<&LatLngBounds>)>,
        radius_km: f64,
    ) -> Result<MapViewState> {
        let region = match searched {
            Some((location, _)) if radius_km > 0.0 => {
                Some(CircleRegion::from_km(location, radius_km)?)
            }
            _ => None,
        };

        let mut inside: Vec<&MarkerRecord> = Vec::new();
        let mut all: Vec<&MarkerRecord> = Vec::with_capacity(markers.len());

        for marker in markers {
            all.push(marker);
            if let Some(region) = &region {
                if region.contains(&marker.coords) {
                    inside.push(marker);
                }
            }
        }

        let radius_matched = !inside.is_empty();
        // An empty radius match reverts to showing everything rather than
        // nothing.
        let in_scope = if radius_matched { &inside } else { &all };

        if let Some(region) = &region {
            if radius_matched {
                log::debug!(
                    "radius {:.1} km matched {} of {} markers",
                    region.radius / 1000.0,
                    inside.len(),
                    markers.len()
                );
            } else {
                log::debug!(
                    "radius {:.1} km matched no markers, falling back to all {}",
                    region.radius / 1000.0,
                    markers.len()
                );
            }
        }

        let mut bounds = LatLngBounds::empty();
        if let Some((location, viewport)) = searched {
            bounds.extend(&location);
            if let Some(viewport) = viewport {
                bounds.extend_bounds(viewport);
            }
        }
        for marker in in_scope.iter() {
            bounds.extend(&marker.coords);
        }

        let (center, zoom) = if self.options.use_bounds_fit && bounds.is_valid() {
            (bounds.center(), ZoomDirective::FitBounds(bounds))
        } else {
            // A stable world view is preferred over an unpredictable
            // fit-to-bounds for multi-marker scenes.
            (
                self.options.world_center,
                ZoomDirective::Fixed(self.options.world_zoom),
            )
        };

        Ok(MapViewState {
            center,
            zoom,
            in_scope: in_scope
                .iter()
                .map(|marker| marker.entity_id.clone())
                .collect(),
            radius_matched,
            region,
        })
    }
}
