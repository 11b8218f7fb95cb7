//! Map-surface collaborator seam
//!
//! A [`MapSurface`] adapts a concrete mapping SDK: it receives center, zoom,
//! and draw instructions and owns all actual rendering. [`apply_view_state`]
//! translates a computed [`MapViewState`] into those calls.

use crate::core::config::ClusterOptions;
use crate::core::geo::{CircleRegion, LatLng, LatLngBounds};
use crate::core::reconcile::{MapViewState, ZoomDirective};
use crate::data::MarkerRecord;
use crate::Result;

/// Drawing capability provided by the embedding application
pub trait MapSurface {
    fn set_center(&mut self, center: LatLng);

    fn set_zoom(&mut self, zoom: f64);

    /// Auto-zoom/pan so all coordinates in `bounds` are visible
    fn fit_bounds(&mut self, bounds: &LatLngBounds) -> Result<()>;

    fn draw_marker(&mut self, marker: &MarkerRecord) -> Result<()>;

    /// Draws the active search-radius circle
    fn draw_circle(&mut self, region: &CircleRegion) -> Result<()>;

    /// Enables or disables marker clustering on the surface
    fn set_clustering(&mut self, enabled: bool);
}

/// Pushes a computed view state onto a surface: in-scope markers first, then
/// the radius circle, then center/zoom, then the clustering hint.
pub fn apply_view_state<S: MapSurface>(
    surface: &mut S,
    state: &MapViewState,
    markers: &[MarkerRecord],
    clustering: &ClusterOptions,
) -> Result<()> {
    let mut drawn = 0usize;
    for marker in markers {
        if state.in_scope.iter().any(|id| id == &marker.entity_id) {
            surface.draw_marker(marker)?;
            drawn += 1;
        }
    }

    if let Some(region) = &state.region {
        surface.draw_circle(region)?;
    }

    surface.set_center(state.center);
    match &state.zoom {
        ZoomDirective::Fixed(zoom) => surface.set_zoom(*zoom),
        ZoomDirective::FitBounds(bounds) => surface.fit_bounds(bounds)?,
    }

    surface.set_clustering(clustering.should_cluster(drawn));

    Ok(())
}
