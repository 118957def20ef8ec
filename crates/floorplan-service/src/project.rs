//! Project snapshot: the record handed to the persistence collaborator.
//!
//! Stored verbatim as JSON with the model's field names, keyed by project
//! id on the storage side.

use floorplan_logic::model::{FloorPlanResult, UserRequirements};
use serde::{Deserialize, Serialize};

/// Requirements, generated variants and the variant the user picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub requirements: UserRequirements,
    pub results: Vec<FloorPlanResult>,
    pub selected_index: usize,
}

impl ProjectSnapshot {
    /// New snapshot with the first variant selected.
    pub fn new(requirements: UserRequirements, results: Vec<FloorPlanResult>) -> Self {
        Self {
            requirements,
            results,
            selected_index: 0,
        }
    }

    /// Select a variant. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.results.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&FloorPlanResult> {
        self.results.get(self.selected_index)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
