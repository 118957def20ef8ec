//! Requirement and floor-plan data model.
//!
//! These types round-trip through the persistence collaborator unchanged,
//! so their serialized field names are part of the public contract
//! (camelCase, lowercase enum tags).
//!
//! ```
//! use floorplan_logic::model::{RoomConfig, Style, UserRequirements};
//!
//! let mut req = UserRequirements::default();
//! req.style = Style::Spacious;
//! req.bedrooms.push(RoomConfig::bedroom("bed-2", "Bedroom 2"));
//! assert_eq!(req.room_count(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::WALL_THICKNESS;

/// Overall spacing style of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Compact,
    Spacious,
}

fn default_num_doors() -> u32 {
    1
}

/// A requested room with its size constraints (m²).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomConfig {
    pub id: String,
    pub name: String,
    pub min_size: f32,
    pub max_size: f32,
    pub preferred_size: f32,
    /// Collected from the wizard; placement always emits one door per room.
    #[serde(default = "default_num_doors")]
    pub num_doors: u32,
    /// Bedrooms only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_ensuite: Option<bool>,
}

impl RoomConfig {
    fn sized(id: &str, name: &str, min: f32, max: f32, preferred: f32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            min_size: min,
            max_size: max,
            preferred_size: preferred,
            num_doors: 1,
            has_ensuite: None,
        }
    }

    /// Secondary bedroom with the wizard's default bounds.
    pub fn bedroom(id: &str, name: &str) -> Self {
        Self {
            has_ensuite: Some(false),
            ..Self::sized(id, name, 9.0, 25.0, 14.0)
        }
    }

    /// Master bedroom; comes with an ensuite.
    pub fn master_bedroom(id: &str, name: &str) -> Self {
        Self {
            has_ensuite: Some(true),
            ..Self::sized(id, name, 12.0, 35.0, 20.0)
        }
    }

    pub fn bathroom(id: &str, name: &str) -> Self {
        Self::sized(id, name, 4.0, 15.0, 6.0)
    }

    pub fn common_area(id: &str, name: &str) -> Self {
        Self::sized(id, name, 12.0, 60.0, 25.0)
    }

    pub fn with_preferred(mut self, size: f32) -> Self {
        self.preferred_size = size;
        self
    }

    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    pub fn with_ensuite(mut self, has_ensuite: bool) -> Self {
        self.has_ensuite = Some(has_ensuite);
        self
    }

    pub fn wants_ensuite(&self) -> bool {
        self.has_ensuite.unwrap_or(false)
    }
}

/// Everything the caller asks for: plot, style and ordered room lists.
///
/// List order matters. The first bedroom is the master in the split
/// layout, and placement order drives left-to-right / top-to-bottom
/// position in every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequirements {
    pub plot_width: f32,
    pub plot_depth: f32,
    pub style: Style,
    pub bedrooms: Vec<RoomConfig>,
    pub bathrooms: Vec<RoomConfig>,
    pub common_areas: Vec<RoomConfig>,
}

impl Default for UserRequirements {
    fn default() -> Self {
        Self {
            plot_width: 12.0,
            plot_depth: 10.0,
            style: Style::Compact,
            bedrooms: vec![RoomConfig::master_bedroom("bedroom-1", "Master Bedroom")],
            bathrooms: vec![RoomConfig::bathroom("bathroom-1", "Bathroom")],
            common_areas: vec![RoomConfig::common_area("common-1", "Living Room")],
        }
    }
}

impl UserRequirements {
    pub fn all_rooms(&self) -> impl Iterator<Item = &RoomConfig> {
        self.bedrooms
            .iter()
            .chain(self.bathrooms.iter())
            .chain(self.common_areas.iter())
    }

    pub fn room_count(&self) -> usize {
        self.bedrooms.len() + self.bathrooms.len() + self.common_areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.room_count() == 0
    }

    pub fn total_preferred_area(&self) -> f32 {
        self.all_rooms().map(|r| r.preferred_size).sum()
    }

    pub fn plot_area(&self) -> f32 {
        self.plot_width * self.plot_depth
    }
}

/// Side of the doorway the swing arc occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Arc handedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swing {
    Cw,
    Ccw,
}

/// A door in absolute plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    pub swing: Swing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Bedroom,
    Bathroom,
    Ensuite,
    Corridor,
    Common,
}

impl RoomType {
    pub const ALL: [RoomType; 5] = [
        RoomType::Bedroom,
        RoomType::Bathroom,
        RoomType::Ensuite,
        RoomType::Corridor,
        RoomType::Common,
    ];

    pub fn is_corridor(self) -> bool {
        self == RoomType::Corridor
    }
}

/// A placed room. Origin is the plot's top-left corner, y grows downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub doors: Vec<Door>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_ensuite: Option<bool>,
}

impl Room {
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// One generated layout variant. Room order is paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanResult {
    pub width: f32,
    pub height: f32,
    pub rooms: Vec<Room>,
    pub wall_thickness: f32,
}

impl FloorPlanResult {
    pub fn new(width: f32, height: f32, rooms: Vec<Room>) -> Self {
        Self {
            width,
            height,
            rooms,
            wall_thickness: WALL_THICKNESS,
        }
    }

    pub fn rooms_of_type(&self, room_type: RoomType) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.room_type == room_type)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}
