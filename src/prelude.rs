//! Prelude module for common pinmap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use pinmap::prelude::*;`

pub use crate::core::{
    config::{ClusterOptions, PinMapOptions, NEIGHBORHOOD_ZOOM, WORLD_ZOOM},
    geo::{CircleRegion, LatLng, LatLngBounds, WORLD_CENTER},
    map::PinMap,
    reconcile::{MapReconciler, MapViewState, ZoomDirective},
};

pub use crate::data::{MarkerRecord, MarkerSet};
pub use crate::events::MapEvent;
pub use crate::geocode::{Geocoder, SearchResult};
pub use crate::surface::{apply_view_state, MapSurface};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
