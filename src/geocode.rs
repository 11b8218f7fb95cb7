//! Geocoding collaborator seam
//!
//! The reconciler never geocodes. Callers resolve a free-text query or a
//! postal code through a [`Geocoder`] implementation (a mapping SDK, a web
//! service, a fixture in tests) and pass the fully resolved [`SearchResult`]
//! into the core.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// A place resolved from a search query.
///
/// Geometry may be absent: geocoders return results without a usable
/// location for inaccurate queries, and the core rejects those instead of
/// guessing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Resolved coordinate of the place
    pub location: Option<LatLng>,
    /// Recommended viewport for the place, when the geocoder supplies one
    pub viewport: Option<LatLngBounds>,
    /// Human-readable label of the resolved place
    pub label: Option<String>,
}

impl SearchResult {
    /// Creates a result with a resolved coordinate
    pub fn at(location: LatLng) -> Self {
        Self {
            location: Some(location),
            viewport: None,
            label: None,
        }
    }

    pub fn with_viewport(mut self, viewport: LatLngBounds) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Gets the resolved coordinate, failing when geometry is missing or
    /// out of range
    pub fn location(&self) -> Result<LatLng> {
        let location = self
            .location
            .ok_or_else(|| MapError::InvalidSearchResult("missing location geometry".into()))?;

        if !location.is_valid() {
            return Err(MapError::InvalidSearchResult(format!(
                "location out of range: ({}, {})",
                location.lat, location.lng
            )));
        }

        Ok(location)
    }
}

/// Resolves free-text queries and postal codes to places
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a query to its best-matching place. Implementations return
    /// a [`SearchResult`] without geometry when nothing matched well enough.
    async fn resolve(&self, query: &str) -> Result<SearchResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_present() {
        let result = SearchResult::at(LatLng::new(50.45, 30.52)).with_label("Kyiv");
        assert_eq!(result.location().unwrap(), LatLng::new(50.45, 30.52));
    }

    #[test]
    fn test_missing_geometry_rejected() {
        let result = SearchResult::default().with_label("nowhere in particular");
        assert!(matches!(
            result.location(),
            Err(MapError::InvalidSearchResult(_))
        ));
    }

    #[test]
    fn test_out_of_range_geometry_rejected() {
        let result = SearchResult::at(LatLng::new(95.0, 10.0));
        assert!(matches!(
            result.location(),
            Err(MapError::InvalidSearchResult(_))
        ));
    }

    struct FixtureGeocoder;

    #[async_trait::async_trait]
    impl Geocoder for FixtureGeocoder {
        async fn resolve(&self, query: &str) -> Result<SearchResult> {
            if query == "01001" {
                Ok(SearchResult::at(LatLng::new(50.45, 30.52)).with_label("Kyiv, 01001"))
            } else {
                Ok(SearchResult::default())
            }
        }
    }

    #[tokio::test]
    async fn test_geocoder_trait_object() {
        let geocoder: Box<dyn Geocoder> = Box::new(FixtureGeocoder);

        let hit = geocoder.resolve("01001").await.unwrap();
        assert!(hit.location().is_ok());

        let miss = geocoder.resolve("gibberish").await.unwrap();
        assert!(miss.location().is_err());
    }
}
