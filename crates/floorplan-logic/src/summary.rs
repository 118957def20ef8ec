//! Per-plan figures shown next to each variant.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{FloorPlanResult, RoomType};

/// Derived figures for one generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub room_counts: HashMap<RoomType, usize>,
    pub door_count: usize,
    /// Placed area of every room except corridors (m²).
    pub room_area: f32,
    pub corridor_area: f32,
    /// Room area as a share of the plot area.
    pub utilization: f32,
}

impl LayoutSummary {
    pub fn count(&self, room_type: RoomType) -> usize {
        self.room_counts.get(&room_type).copied().unwrap_or(0)
    }
}

pub fn summarize(plan: &FloorPlanResult) -> LayoutSummary {
    let mut room_counts = HashMap::new();
    let mut room_area = 0.0;
    let mut corridor_area = 0.0;
    let mut door_count = 0;

    for room in &plan.rooms {
        *room_counts.entry(room.room_type).or_insert(0) += 1;
        door_count += room.doors.len();
        if room.room_type.is_corridor() {
            corridor_area += room.area();
        } else {
            room_area += room.area();
        }
    }

    let plot_area = plan.width * plan.height;
    let utilization = if plot_area > 0.0 {
        room_area / plot_area
    } else {
        0.0
    };

    LayoutSummary {
        room_counts,
        door_count,
        room_area,
        corridor_area,
        utilization,
    }
}
