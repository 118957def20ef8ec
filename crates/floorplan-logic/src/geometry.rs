//! Geometry checks for generated floor plans.
//!
//! Placement avoids overlap by construction; these checks confirm it.
//! Findings are diagnostics and never block a result.

use serde::{Deserialize, Serialize};

use crate::model::{FloorPlanResult, Room};

/// Tolerance for touching edges and wall contact (meters).
pub const TOLERANCE: f32 = 1e-3;

/// A geometry finding on a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutIssue {
    pub category: String,
    pub message: String,
}

impl LayoutIssue {
    fn new(category: &str, message: String) -> Self {
        Self {
            category: category.to_string(),
            message,
        }
    }
}

// ── Per-room ────────────────────────────────────────────────────────────

/// Rooms with zero or negative dimensions.
pub fn check_room_dimensions(plan: &FloorPlanResult) -> Vec<LayoutIssue> {
    plan.rooms
        .iter()
        .filter(|r| r.w <= 0.0 || r.h <= 0.0)
        .map(|r| {
            LayoutIssue::new(
                "room_geometry",
                format!("Room '{}' has non-positive dimensions: {}×{}", r.id, r.w, r.h),
            )
        })
        .collect()
}

/// Rooms reaching into the outer wall or past the plot.
pub fn check_containment(plan: &FloorPlanResult) -> Vec<LayoutIssue> {
    let wall = plan.wall_thickness;
    let max_x = plan.width - wall + TOLERANCE;
    let max_y = plan.height - wall + TOLERANCE;
    let min = wall - TOLERANCE;

    plan.rooms
        .iter()
        .filter(|r| r.x < min || r.y < min || r.right() > max_x || r.bottom() > max_y)
        .map(|r| {
            LayoutIssue::new(
                "containment",
                format!(
                    "Room '{}' extends outside the interior: ({:.2},{:.2})→({:.2},{:.2}) vs plot {}×{}",
                    r.id,
                    r.x,
                    r.y,
                    r.right(),
                    r.bottom(),
                    plan.width,
                    plan.height
                ),
            )
        })
        .collect()
}

// ── Pairwise ────────────────────────────────────────────────────────────

fn overlaps(a: &Room, b: &Room) -> bool {
    let overlap_x = a.right() - TOLERANCE > b.x && b.right() - TOLERANCE > a.x;
    let overlap_y = a.bottom() - TOLERANCE > b.y && b.bottom() - TOLERANCE > a.y;
    overlap_x && overlap_y
}

/// AABB overlap test over every pair of rooms, corridors included.
pub fn check_room_overlaps(plan: &FloorPlanResult) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();
    for (i, a) in plan.rooms.iter().enumerate() {
        for b in &plan.rooms[i + 1..] {
            if overlaps(a, b) {
                issues.push(LayoutIssue::new(
                    "room_overlap",
                    format!("Rooms '{}' and '{}' overlap", a.id, b.id),
                ));
            }
        }
    }
    issues
}

// ── Doors ───────────────────────────────────────────────────────────────

pub fn check_corridor_doors(plan: &FloorPlanResult) -> Vec<LayoutIssue> {
    plan.rooms
        .iter()
        .filter(|r| r.room_type.is_corridor() && !r.doors.is_empty())
        .map(|r| {
            LayoutIssue::new(
                "door_validity",
                format!("Corridor '{}' has {} door(s)", r.id, r.doors.len()),
            )
        })
        .collect()
}

/// Every other room has exactly one door.
pub fn check_door_counts(plan: &FloorPlanResult) -> Vec<LayoutIssue> {
    plan.rooms
        .iter()
        .filter(|r| !r.room_type.is_corridor() && r.doors.len() != 1)
        .map(|r| {
            LayoutIssue::new(
                "door_validity",
                format!("Room '{}' has {} doors, expected 1", r.id, r.doors.len()),
            )
        })
        .collect()
}

// ── Master validation ───────────────────────────────────────────────────

/// Run every geometry check and return the combined findings.
pub fn validate_layout(plan: &FloorPlanResult) -> Vec<LayoutIssue> {
    let mut all = Vec::new();
    all.extend(check_room_dimensions(plan));
    all.extend(check_containment(plan));
    all.extend(check_room_overlaps(plan));
    all.extend(check_corridor_doors(plan));
    all.extend(check_door_counts(plan));
    all
}
