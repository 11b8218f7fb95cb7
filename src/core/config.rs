//! Configuration for pin-map view behavior
//!
//! Every map instance carries its own `PinMapOptions`, handed over at
//! construction. Nothing is looked up from shared global state, so several
//! panes on one page can be configured independently.

use crate::core::geo::{LatLng, WORLD_CENTER};
use serde::{Deserialize, Serialize};

/// Zoom level showing the whole world
pub const WORLD_ZOOM: f64 = 2.0;
/// Zoom level for a single localized marker
pub const NEIGHBORHOOD_ZOOM: f64 = 11.0;

/// Per-instance view behavior options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinMapOptions {
    /// Fallback center when there is nothing to localize against
    pub world_center: LatLng,
    /// Zoom used for the fallback world view
    pub world_zoom: f64,
    /// Zoom used when centering on a single marker
    pub neighborhood_zoom: f64,
    /// Emit a fit-bounds directive for multi-marker scenes instead of the
    /// fixed world view
    pub use_bounds_fit: bool,
    /// Zoom in on a searched place when the dataset is empty. Off by
    /// default: the historical behavior keeps the world zoom there.
    pub localize_single_search: bool,
    /// Default search radius in kilometers; zero disables radius filtering
    pub search_radius_km: f64,
    /// Advisory clustering settings for the surface adapter
    pub clustering: ClusterOptions,
}

impl PinMapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_world_center(mut self, center: LatLng) -> Self {
        self.world_center = center;
        self
    }

    pub fn with_bounds_fit(mut self, enabled: bool) -> Self {
        self.use_bounds_fit = enabled;
        self
    }

    pub fn with_localized_search(mut self, enabled: bool) -> Self {
        self.localize_single_search = enabled;
        self
    }

    pub fn with_search_radius_km(mut self, radius_km: f64) -> Self {
        self.search_radius_km = radius_km;
        self
    }

    pub fn with_clustering(mut self, clustering: ClusterOptions) -> Self {
        self.clustering = clustering;
        self
    }

    /// Normalizes a caller-supplied radius. Radius is an optional
    /// refinement, so malformed values are clamped rather than raised.
    pub fn normalize_radius_km(radius_km: f64) -> f64 {
        if radius_km.is_nan() || radius_km < 0.0 {
            log::warn!("clamping invalid search radius {} km to 0", radius_km);
            0.0
        } else {
            radius_km
        }
    }
}

impl Default for PinMapOptions {
    fn default() -> Self {
        Self {
            world_center: WORLD_CENTER,
            world_zoom: WORLD_ZOOM,
            neighborhood_zoom: NEIGHBORHOOD_ZOOM,
            use_bounds_fit: false,
            localize_single_search: false,
            search_radius_km: 0.0,
            clustering: ClusterOptions::default(),
        }
    }
}

/// Clustering hints for the surface adapter. The reconciler never clusters;
/// it only reports whether the adapter should.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterOptions {
    pub enabled: bool,
    /// Cluster only while the drawn marker count stays at or below this
    pub max_markers: usize,
}

impl ClusterOptions {
    pub fn should_cluster(&self, marker_count: usize) -> bool {
        self.enabled && marker_count > 1 && marker_count <= self.max_markers
    }
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            max_markers: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PinMapOptions::default();

        assert_eq!(options.world_center, WORLD_CENTER);
        assert_eq!(options.world_zoom, 2.0);
        assert_eq!(options.neighborhood_zoom, 11.0);
        assert!(!options.use_bounds_fit);
        assert!(!options.localize_single_search);
    }

    #[test]
    fn test_builder_chain() {
        let options = PinMapOptions::new()
            .with_bounds_fit(true)
            .with_search_radius_km(25.0);

        assert!(options.use_bounds_fit);
        assert_eq!(options.search_radius_km, 25.0);
    }

    #[test]
    fn test_radius_normalization() {
        assert_eq!(PinMapOptions::normalize_radius_km(5.0), 5.0);
        assert_eq!(PinMapOptions::normalize_radius_km(-3.0), 0.0);
        assert_eq!(PinMapOptions::normalize_radius_km(f64::NAN), 0.0);
    }

    #[test]
    fn test_cluster_threshold() {
        let clustering = ClusterOptions {
            enabled: true,
            max_markers: 10,
        };

        assert!(clustering.should_cluster(10));
        assert!(!clustering.should_cluster(11));
        assert!(!clustering.should_cluster(1));
        assert!(!ClusterOptions::default().should_cluster(5));
    }
}
