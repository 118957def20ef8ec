//! Layout engine: one floor plan per layout variant.
//!
//! The engine trusts its input. Requirements that fail validation can
//! produce degenerate rectangles; callers run
//! [`validate_requirements`](crate::validation::validate_requirements) first.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CORRIDOR_WIDTH_COMPACT, CORRIDOR_WIDTH_SPACIOUS, L_SHAPED_PRIVATE_RATIO, LINEAR_PRIVATE_RATIO,
    ROOM_PADDING_COMPACT, ROOM_PADDING_SPACIOUS, SPLIT_PRIVATE_RATIO, WALL_THICKNESS,
};
use crate::model::{FloorPlanResult, Style, UserRequirements};
use crate::placement::{place_l_shaped, place_linear, place_split, FloorPlanBuilder};
use crate::zones::allocate_zones;

/// The closed set of layout algorithms, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    /// Private band, corridor, public band stacked top to bottom.
    Linear,
    /// Bedroom strip on one side, public zone in the remaining L.
    LShaped,
    /// Master and secondary bedrooms on opposite sides of a central zone.
    Split,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 3] = [
        LayoutVariant::Linear,
        LayoutVariant::LShaped,
        LayoutVariant::Split,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            LayoutVariant::Linear => 0,
            LayoutVariant::LShaped => 1,
            LayoutVariant::Split => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutVariant::Linear => "Linear",
            LayoutVariant::LShaped => "L-Shaped",
            LayoutVariant::Split => "Split",
        }
    }

    pub fn private_zone_ratio(self) -> f32 {
        match self {
            LayoutVariant::Linear => LINEAR_PRIVATE_RATIO,
            LayoutVariant::LShaped => L_SHAPED_PRIVATE_RATIO,
            LayoutVariant::Split => SPLIT_PRIVATE_RATIO,
        }
    }
}

impl Style {
    pub fn corridor_width(self) -> f32 {
        match self {
            Style::Compact => CORRIDOR_WIDTH_COMPACT,
            Style::Spacious => CORRIDOR_WIDTH_SPACIOUS,
        }
    }

    pub fn room_padding(self) -> f32 {
        match self {
            Style::Compact => ROOM_PADDING_COMPACT,
            Style::Spacious => ROOM_PADDING_SPACIOUS,
        }
    }
}

/// Per-call geometry derived from the requirements and variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub wall: f32,
    pub inner_w: f32,
    pub inner_h: f32,
    pub corridor_w: f32,
    pub room_padding: f32,
    pub private_zone_h: f32,
}

impl LayoutParams {
    pub fn for_requirements(req: &UserRequirements, variant: LayoutVariant) -> Self {
        let wall = WALL_THICKNESS;
        let inner_h = req.plot_depth - 2.0 * wall;
        Self {
            wall,
            inner_w: req.plot_width - 2.0 * wall,
            inner_h,
            corridor_w: req.style.corridor_width(),
            room_padding: req.style.room_padding(),
            private_zone_h: inner_h * variant.private_zone_ratio(),
        }
    }
}

/// Lay out one variant. Pure and deterministic.
pub fn layout_floor_plan(req: &UserRequirements, variant: LayoutVariant) -> FloorPlanResult {
    let params = LayoutParams::for_requirements(req, variant);
    let zones = allocate_zones(variant, &params, req.bathrooms.len());
    let mut builder = FloorPlanBuilder::new(req.plot_width, req.plot_depth);

    match variant {
        LayoutVariant::Linear => place_linear(&mut builder, req, &zones, &params),
        LayoutVariant::LShaped => place_l_shaped(&mut builder, req, &zones, &params),
        LayoutVariant::Split => place_split(&mut builder, req, &zones, &params),
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Direction, RoomConfig, RoomType, Swing};

    const EPS: f32 = 1e-4;

    fn two_bedroom_plan() -> UserRequirements {
        UserRequirements {
            plot_width: 14.0,
            plot_depth: 11.0,
            style: Style::Compact,
            bedrooms: vec![
                RoomConfig::master_bedroom("bed-1", "Master"),
                RoomConfig::bedroom("bed-2", "Bedroom 2"),
            ],
            bathrooms: vec![RoomConfig::bathroom("bath-1", "Bathroom")],
            common_areas: vec![
                RoomConfig::common_area("living", "Living"),
                RoomConfig::common_area("kitchen", "Kitchen"),
            ],
        }
    }

    fn types(plan: &FloorPlanResult) -> Vec<RoomType> {
        plan.rooms.iter().map(|r| r.room_type).collect()
    }

    #[test]
    fn variant_indices_round_trip() {
        for (i, variant) in LayoutVariant::ALL.iter().enumerate() {
            assert_eq!(variant.index(), i);
            assert_eq!(LayoutVariant::from_index(i), Some(*variant));
        }
        assert_eq!(LayoutVariant::from_index(3), None);
    }

    #[test]
    fn style_drives_corridor_and_padding() {
        let mut req = two_bedroom_plan();
        let compact = LayoutParams::for_requirements(&req, LayoutVariant::Linear);
        req.style = Style::Spacious;
        let spacious = LayoutParams::for_requirements(&req, LayoutVariant::Linear);
        assert_eq!(compact.corridor_w, 1.0);
        assert_eq!(spacious.corridor_w, 1.2);
        assert_eq!(compact.room_padding, 0.05);
        assert_eq!(spacious.room_padding, 0.15);
        assert!((compact.inner_w - 13.7).abs() < EPS);
        assert!((compact.private_zone_h - 10.7 * 0.45).abs() < EPS);
    }

    #[test]
    fn linear_paint_order() {
        let plan = layout_floor_plan(&two_bedroom_plan(), LayoutVariant::Linear);
        assert_eq!(
            types(&plan),
            vec![
                RoomType::Bedroom,
                RoomType::Ensuite,
                RoomType::Bedroom,
                RoomType::Bathroom,
                RoomType::Corridor,
                RoomType::Common,
                RoomType::Common,
            ]
        );
    }

    #[test]
    fn linear_bedroom_doors_face_corridor_and_alternate() {
        let plan = layout_floor_plan(&two_bedroom_plan(), LayoutVariant::Linear);
        let bedrooms: Vec<_> = plan.rooms_of_type(RoomType::Bedroom).collect();
        assert_eq!(bedrooms[0].doors[0].swing, Swing::Cw);
        assert_eq!(bedrooms[1].doors[0].swing, Swing::Ccw);
        for bed in bedrooms {
            let door = bed.doors[0];
            assert_eq!(door.direction, Direction::Down);
            assert!((door.x - (bed.x + 0.25 * bed.w)).abs() < EPS);
            assert!((door.y - bed.bottom()).abs() < EPS);
        }
    }

    #[test]
    fn linear_bathroom_door_on_left_wall() {
        let plan = layout_floor_plan(&two_bedroom_plan(), LayoutVariant::Linear);
        let bath = plan.room("bath-1").expect("bathroom placed");
        let door = bath.doors[0];
        assert_eq!(door.direction, Direction::Left);
        assert_eq!(door.swing, Swing::Cw);
        assert!((door.x - bath.x).abs() < EPS);
        assert!((door.y - (bath.y + bath.h / 2.0)).abs() < EPS);
    }

    #[test]
    fn linear_common_doors_open_from_corridor() {
        let plan = layout_floor_plan(&two_bedroom_plan(), LayoutVariant::Linear);
        let corridor = plan.room("corridor").expect("corridor placed");
        for (i, common) in plan.rooms_of_type(RoomType::Common).enumerate() {
            let door = common.doors[0];
            assert_eq!(door.direction, Direction::Up);
            assert_eq!(door.swing, if i % 2 == 0 { Swing::Cw } else { Swing::Ccw });
            assert!(common.y >= corridor.bottom());
            assert!((door.x - (common.x + common.w / 2.0)).abs() < EPS);
        }
    }

    #[test]
    fn l_shaped_bedrooms_open_onto_vertical_leg() {
        let plan = layout_floor_plan(&two_bedroom_plan(), LayoutVariant::LShaped);
        let leg = plan.room("corridor-1").expect("vertical leg");
        assert!(plan.room("corridor-2").is_some());
        for bed in plan.rooms_of_type(RoomType::Bedroom) {
            assert_eq!(bed.doors[0].direction, Direction::Right);
            assert!(bed.right() <= leg.x + EPS);
        }
        for bath in plan.rooms_of_type(RoomType::Bathroom) {
            assert_eq!(bath.doors[0].direction, Direction::Down);
        }
    }

    #[test]
    fn split_isolates_master_from_secondary_bedrooms() {
        let plan = layout_floor_plan(&two_bedroom_plan(), LayoutVariant::Split);
        let master = plan.room("bed-1").expect("master placed");
        let second = plan.room("bed-2").expect("secondary placed");
        let corridor = plan.room("corridor").expect("corridor placed");
        assert!(master.right() <= corridor.x + EPS);
        assert!(second.x >= corridor.right() - EPS);
        assert_eq!(master.doors[0].direction, Direction::Right);
        assert_eq!(second.doors[0].direction, Direction::Left);
        assert_eq!(second.doors[0].swing, Swing::Ccw);

        let ensuite = plan.room("bed-1-ensuite").expect("master ensuite");
        assert!(ensuite.right() <= master.x);
        assert_eq!(ensuite.doors[0].direction, Direction::Right);
    }

    #[test]
    fn split_with_single_bedroom_leaves_secondary_zone_empty() {
        let mut req = two_bedroom_plan();
        req.bedrooms.truncate(1);
        let plan = layout_floor_plan(&req, LayoutVariant::Split);
        assert_eq!(plan.rooms_of_type(RoomType::Bedroom).count(), 1);
    }

    #[test]
    fn no_bedrooms_still_places_other_rooms() {
        let mut req = two_bedroom_plan();
        req.bedrooms.clear();
        for variant in LayoutVariant::ALL {
            let plan = layout_floor_plan(&req, variant);
            assert_eq!(plan.rooms_of_type(RoomType::Bedroom).count(), 0);
            assert_eq!(plan.rooms_of_type(RoomType::Common).count(), 2);
            assert_eq!(plan.rooms_of_type(RoomType::Bathroom).count(), 1);
        }
    }

    #[test]
    fn num_doors_does_not_change_door_count() {
        let mut req = two_bedroom_plan();
        for room in &mut req.common_areas {
            room.num_doors = 3;
        }
        let plan = layout_floor_plan(&req, LayoutVariant::Linear);
        for common in plan.rooms_of_type(RoomType::Common) {
            assert_eq!(common.doors.len(), 1);
        }
    }
}
