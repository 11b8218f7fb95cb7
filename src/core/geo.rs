use crate::Result;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, used by the Haversine distance
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// The geographical centre of Earth, used as the neutral fallback center
/// when the map has nothing better to localize against.
///
/// See <https://en.wikipedia.org/wiki/Geographical_centre_of_Earth>.
pub const WORLD_CENTER: LatLng = LatLng { lat: 39.0, lng: 34.0 };

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Calculates the distance to another LatLng in meters using the
    /// Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the Web Mercator displayable range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Creates empty bounds (invalid bounds that can be extended)
    pub fn empty() -> Self {
        Self::new(
            LatLng::new(f64::INFINITY, f64::INFINITY),
            LatLng::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        )
    }

    /// Checks if the bounds are valid (south-west <= north-east)
    pub fn is_valid(&self) -> bool {
        self.south_west.lat <= self.north_east.lat && self.south_west.lng <= self.north_east.lng
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Extends the bounds to include another bounds
    pub fn extend_bounds(&mut self, other: &LatLngBounds) {
        self.extend(&other.south_west);
        self.extend(&other.north_east);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Circular containment region used for search-radius filtering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleRegion {
    /// The searched point the circle is centered on
    pub center: LatLng,
    /// Radius in meters
    pub radius: f64,
}

impl CircleRegion {
    /// Creates a region from a center and a radius in meters
    pub fn new(center: LatLng, radius: f64) -> Result<Self> {
        if !center.is_valid() {
            return Err(crate::MapError::InvalidCoordinates(format!(
                "circle center out of range: ({}, {})",
                center.lat, center.lng
            )));
        }
        Ok(Self { center, radius })
    }

    /// Creates a region from a radius given in kilometers
    pub fn from_km(center: LatLng, radius_km: f64) -> Result<Self> {
        Self::new(center, radius_km * 1000.0)
    }

    /// Checks if a point falls within the region
    pub fn contains(&self, point: &LatLng) -> bool {
        self.center.distance_to(point) <= self.radius
    }

    /// Gets the bounding box circumscribing the circle
    pub fn bounds(&self) -> LatLngBounds {
        let lat_delta = (self.radius / EARTH_RADIUS).to_degrees();
        let lng_delta = lat_delta / self.center.lat.to_radians().cos().abs().max(1e-9);

        LatLngBounds::new(
            LatLng::new(self.center.lat - lat_delta, self.center.lng - lng_delta),
            LatLng::new(self.center.lat + lat_delta, self.center.lng + lng_delta),
        )
    }
}
