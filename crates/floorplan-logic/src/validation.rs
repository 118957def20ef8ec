//! Requirement validation.
//!
//! Errors are collected and returned as data; a non-empty list blocks
//! generation. Every rule runs even when an earlier one fails, except the
//! empty-requirements check which short-circuits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BATHROOM_MAX_AREA, BATHROOM_MIN_AREA, MAX_PLOT_COVERAGE, MIN_TOTAL_ROOM_AREA,
};
use crate::model::{RoomConfig, UserRequirements};

/// A requirement problem, keyed by the form field it belongs to
/// (`rooms`, `bedroom-0`, `bathroom-2`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate requirements, returning all errors found.
pub fn validate_requirements(req: &UserRequirements) -> Vec<ValidationError> {
    if req.is_empty() {
        return vec![ValidationError::new("rooms", "Add at least one room")];
    }

    let mut errors = Vec::new();
    errors.extend(check_total_area(req));

    for (i, room) in req.bedrooms.iter().enumerate() {
        errors.extend(check_own_bounds(&format!("bedroom-{i}"), "Bedroom", i, room));
    }
    for (i, room) in req.bathrooms.iter().enumerate() {
        errors.extend(check_bathroom_bounds(i, room));
    }
    for (i, room) in req.common_areas.iter().enumerate() {
        errors.extend(check_own_bounds(&format!("common-{i}"), "Common area", i, room));
    }

    errors
}

fn check_total_area(req: &UserRequirements) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let total = req.total_preferred_area();
    let limit = req.plot_area() * MAX_PLOT_COVERAGE;

    if total > limit {
        errors.push(ValidationError::new(
            "rooms",
            format!(
                "Total room area ({:.0} m²) exceeds 95% of the plot area ({:.0} m²)",
                total.round(),
                limit.round()
            ),
        ));
    }
    if total < MIN_TOTAL_ROOM_AREA {
        errors.push(ValidationError::new(
            "rooms",
            format!(
                "Total room area ({:.0} m²) is below the {:.0} m² minimum for a livable plan",
                total.round(),
                MIN_TOTAL_ROOM_AREA
            ),
        ));
    }
    errors
}

/// Bedrooms and common areas are checked against their own min/max.
fn check_own_bounds(
    field: &str,
    kind: &str,
    index: usize,
    room: &RoomConfig,
) -> Vec<ValidationError> {
    bounds_errors(field, kind, index, room.preferred_size, room.min_size, room.max_size)
}

/// Bathrooms use fixed bounds and ignore their own min/max fields.
fn check_bathroom_bounds(index: usize, room: &RoomConfig) -> Vec<ValidationError> {
    bounds_errors(
        &format!("bathroom-{index}"),
        "Bathroom",
        index,
        room.preferred_size,
        BATHROOM_MIN_AREA,
        BATHROOM_MAX_AREA,
    )
}

fn bounds_errors(
    field: &str,
    kind: &str,
    index: usize,
    preferred: f32,
    min: f32,
    max: f32,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if preferred < min {
        errors.push(ValidationError::new(
            field,
            format!("{kind} {} is too small, minimum {min} m²", index + 1),
        ));
    }
    if preferred > max {
        errors.push(ValidationError::new(
            field,
            format!("{kind} {} is too large, maximum {max} m²", index + 1),
        ));
    }
    errors
}
