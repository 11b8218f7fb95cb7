//! Marker dataset loading and merging
//!
//! Markers arrive as one or more JSON documents prepared by the backend.
//! The documents are merged into a single ordered [`MarkerSet`] before the
//! map starts; the set is immutable for the lifetime of a page view.

pub mod marker;

pub use marker::MarkerRecord;

use crate::prelude::HashSet;
use crate::Result;

/// The merged, ordered marker dataset for one map instance
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    records: Vec<MarkerRecord>,
}

impl MarkerSet {
    pub fn new(records: Vec<MarkerRecord>) -> Result<Self> {
        let mut set = Self::default();
        set.merge(records)?;
        Ok(set)
    }

    /// Parses and merges marker documents in the order given.
    ///
    /// Each document is a JSON array of marker records. Records sharing an
    /// `entity_id` with an earlier record are dropped; the first occurrence
    /// wins.
    pub fn from_documents(documents: &[&str]) -> Result<Self> {
        let mut set = Self::default();

        for document in documents {
            let records: Vec<MarkerRecord> = serde_json::from_str(document)?;
            set.merge(records)?;
        }

        log::debug!("loaded {} markers", set.len());
        Ok(set)
    }

    fn merge(&mut self, records: Vec<MarkerRecord>) -> Result<()> {
        let mut seen: HashSet<String> = self
            .records
            .iter()
            .map(|record| record.entity_id.clone())
            .collect();

        for record in records {
            record.validate()?;

            if !seen.insert(record.entity_id.clone()) {
                log::debug!("dropping duplicate marker {}", record.entity_id);
                continue;
            }

            self.records.push(record);
        }

        Ok(())
    }

    /// Gets the markers in dataset order
    pub fn records(&self) -> &[MarkerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a marker by its identifier
    pub fn get(&self, entity_id: &str) -> Option<&MarkerRecord> {
        self.records
            .iter()
            .find(|record| record.entity_id == entity_id)
    }
}
