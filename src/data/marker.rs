use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// A point location with display metadata shown on the map.
///
/// Display fields are opaque to the reconciler; they pass through to the
/// UI layer that renders markers and their info windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Application-defined identifier
    pub entity_id: String,
    pub coords: LatLng,
    #[serde(default)]
    pub organisation_name: Option<String>,
    #[serde(default)]
    pub thoroughfare: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl MarkerRecord {
    pub fn new(entity_id: impl Into<String>, coords: LatLng) -> Self {
        Self {
            entity_id: entity_id.into(),
            coords,
            organisation_name: None,
            thoroughfare: None,
            postal_code: None,
            locality: None,
            country: None,
            phone_number: None,
        }
    }

    pub fn with_organisation(mut self, name: impl Into<String>) -> Self {
        self.organisation_name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    /// Checks the record coordinate on the way into a dataset
    pub fn validate(&self) -> Result<()> {
        if !self.coords.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "marker {}: ({}, {})",
                self.entity_id, self.coords.lat, self.coords.lng
            )));
        }
        Ok(())
    }

    /// Builds the info-window text lines for this marker: organisation
    /// name, one address line, phone. Empty fields are skipped; the UI
    /// layer owns the markup.
    pub fn popup_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(organisation) = &self.organisation_name {
            lines.push(organisation.clone());
        }

        let address: Vec<&str> = [
            self.thoroughfare.as_deref(),
            self.postal_code.as_deref(),
            self.locality.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !address.is_empty() {
            lines.push(address.join(", "));
        }

        if let Some(phone) = &self.phone_number {
            lines.push(format!("Phone: {}", phone));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "entity_id": "42",
            "coords": {"lat": 50.45, "lng": 30.52},
            "organisation_name": "Main office",
            "thoroughfare": "1 Khreshchatyk St",
            "postal_code": "01001",
            "locality": "Kyiv",
            "country": "Ukraine",
            "phone_number": "+380 44 000 0000"
        }"#;

        let record: MarkerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.entity_id, "42");
        assert_eq!(record.coords, LatLng::new(50.45, 30.52));
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"entity_id": "7", "coords": {"lat": 1.0, "lng": 2.0}}"#;

        let record: MarkerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.organisation_name, None);
        assert!(record.popup_lines().is_empty());
    }

    #[test]
    fn test_popup_lines() {
        let json = r#"{
            "entity_id": "42",
            "coords": {"lat": 50.45, "lng": 30.52},
            "organisation_name": "Main office",
            "thoroughfare": "1 Khreshchatyk St",
            "postal_code": "01001",
            "locality": "Kyiv",
            "country": "Ukraine",
            "phone_number": "+380 44 000 0000"
        }"#;
        let record: MarkerRecord = serde_json::from_str(json).unwrap();

        let lines = record.popup_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Main office");
        assert_eq!(lines[1], "1 Khreshchatyk St, 01001, Kyiv, Ukraine");
        assert_eq!(lines[2], "Phone: +380 44 000 0000");
    }

    #[test]
    fn test_popup_lines_skip_missing_fields() {
        let record = MarkerRecord::new("1", LatLng::new(1.0, 2.0)).with_phone("555-0100");

        let lines = record.popup_lines();
        assert_eq!(lines, vec!["Phone: 555-0100".to_string()]);
    }
}
