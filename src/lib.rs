//! # pinmap
//!
//! View-state reconciliation for marker ("pin") maps.
//!
//! Given an immutable marker dataset, an optional geocoder-resolved search
//! result, and a per-instance configuration, this crate decides what the map
//! should show next: the center, the zoom directive, and the subset of
//! markers in scope after radius filtering. Drawing, geocoding, and data
//! transport live behind collaborator traits so any mapping SDK can be
//! plugged in underneath.

pub mod core;
pub mod data;
pub mod events;
pub mod geocode;
pub mod prelude;
pub mod surface;

// Re-export public API
pub use crate::core::{
    config::{ClusterOptions, PinMapOptions},
    geo::{CircleRegion, LatLng, LatLngBounds},
    map::PinMap,
    reconcile::{MapReconciler, MapViewState, ZoomDirective},
};

pub use crate::data::{MarkerRecord, MarkerSet};
pub use crate::events::MapEvent;
pub use crate::geocode::{Geocoder, SearchResult};
pub use crate::surface::MapSurface;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid search result: {0}")]
    InvalidSearchResult(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Surface error: {0}")]
    Surface(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Initializes env_logger so `log` output from the reconciler is visible.
/// Intended for binaries, demos, and tests; safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_debug_logging() {
    let _ = env_logger::builder().try_init();
}
