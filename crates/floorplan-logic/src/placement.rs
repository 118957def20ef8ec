//! Room placement for the three layout variants.
//!
//! Each category of rooms is spread uniformly across its zone in list
//! order. Bedrooms may carve an ensuite out of their exterior side, and
//! every placed room gets its door as it is placed.

use crate::constants::{
    CENTERED_DOOR_OFFSET, ENSUITE_HEIGHT_FRACTION, ENSUITE_WIDTH_FRACTION,
    LINEAR_BEDROOM_DOOR_OFFSET,
};
use crate::doors::{door_on_edge, swing_for_index, Edge};
use crate::engine::LayoutParams;
use crate::model::{Door, FloorPlanResult, Room, RoomConfig, RoomType, Swing, UserRequirements};
use crate::zones::{Rect, ZonePlan};

/// Collects placed rooms in paint order.
#[derive(Debug, Clone)]
pub struct FloorPlanBuilder {
    width: f32,
    height: f32,
    rooms: Vec<Room>,
}

impl FloorPlanBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            rooms: Vec::new(),
        }
    }

    pub fn add(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Corridors are never inset and never get doors.
    pub fn add_corridors(&mut self, legs: &[Rect]) {
        for (i, leg) in legs.iter().enumerate() {
            let id = if legs.len() == 1 {
                "corridor".to_string()
            } else {
                format!("corridor-{}", i + 1)
            };
            self.add(make_room(id, RoomType::Corridor, "Corridor".into(), leg, Vec::new(), None));
        }
    }

    pub fn build(self) -> FloorPlanResult {
        FloorPlanResult::new(self.width, self.height, self.rooms)
    }
}

fn make_room(
    id: String,
    room_type: RoomType,
    label: String,
    rect: &Rect,
    doors: Vec<Door>,
    has_ensuite: Option<bool>,
) -> Room {
    Room {
        id,
        room_type,
        label,
        x: rect.x,
        y: rect.y,
        w: rect.w,
        h: rect.h,
        doors,
        has_ensuite,
    }
}

/// Side of a bedroom slot the ensuite is carved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarveSide {
    Left,
    Right,
}

/// Door wall and offset for a bedroom.
#[derive(Debug, Clone, Copy)]
struct DoorSpec {
    edge: Edge,
    offset: f32,
}

fn place_bedroom(
    builder: &mut FloorPlanBuilder,
    cfg: &RoomConfig,
    index: usize,
    slot: &Rect,
    padding: f32,
    carve: CarveSide,
    door: DoorSpec,
) {
    let base = slot.inset(padding);
    let swing = swing_for_index(index);

    if !cfg.wants_ensuite() {
        let bed_door = door_on_edge(&base, door.edge, door.offset, swing);
        builder.add(make_room(
            cfg.id.clone(),
            RoomType::Bedroom,
            cfg.name.clone(),
            &base,
            vec![bed_door],
            Some(false),
        ));
        return;
    }

    let ensuite_w = slot.w * ENSUITE_WIDTH_FRACTION;
    let bed_w = base.w - ensuite_w - padding;
    let ensuite_h = base.h * ENSUITE_HEIGHT_FRACTION;
    let (bed, ensuite, ensuite_edge) = match carve {
        CarveSide::Right => (
            Rect::new(base.x, base.y, bed_w, base.h),
            Rect::new(base.right() - ensuite_w, base.y, ensuite_w, ensuite_h),
            Edge::Left,
        ),
        CarveSide::Left => (
            Rect::new(base.x + ensuite_w + padding, base.y, bed_w, base.h),
            Rect::new(base.x, base.y, ensuite_w, ensuite_h),
            Edge::Right,
        ),
    };

    builder.add(make_room(
        cfg.id.clone(),
        RoomType::Bedroom,
        cfg.name.clone(),
        &bed,
        vec![door_on_edge(&bed, door.edge, door.offset, swing)],
        Some(true),
    ));
    builder.add(make_room(
        format!("{}-ensuite", cfg.id),
        RoomType::Ensuite,
        format!("{} Ensuite", cfg.name),
        &ensuite,
        vec![door_on_edge(&ensuite, ensuite_edge, CENTERED_DOOR_OFFSET, swing)],
        None,
    ));
}

/// Place bathrooms or common areas one per slot. `fixed_swing` overrides
/// the usual alternation.
fn place_group(
    builder: &mut FloorPlanBuilder,
    configs: &[RoomConfig],
    slots: &[Rect],
    room_type: RoomType,
    padding: f32,
    edge: Edge,
    fixed_swing: Option<Swing>,
) {
    for (i, (cfg, slot)) in configs.iter().zip(slots).enumerate() {
        let rect = slot.inset(padding);
        let swing = fixed_swing.unwrap_or_else(|| swing_for_index(i));
        let door = door_on_edge(&rect, edge, CENTERED_DOOR_OFFSET, swing);
        builder.add(make_room(
            cfg.id.clone(),
            room_type,
            cfg.name.clone(),
            &rect,
            vec![door],
            None,
        ));
    }
}

/// Bedrooms side by side above the corridor with doors on their lower
/// wall; bathrooms stacked in the right strip; common areas below.
pub fn place_linear(
    builder: &mut FloorPlanBuilder,
    req: &UserRequirements,
    zones: &ZonePlan,
    params: &LayoutParams,
) {
    let pad = params.room_padding;
    let bed_door = DoorSpec {
        edge: Edge::Bottom,
        offset: LINEAR_BEDROOM_DOOR_OFFSET,
    };
    let slots = zones.bedrooms.columns(req.bedrooms.len());
    for (i, (cfg, slot)) in req.bedrooms.iter().zip(&slots).enumerate() {
        place_bedroom(builder, cfg, i, slot, pad, CarveSide::Right, bed_door);
    }

    let bath_slots = zones.bathrooms.rows(req.bathrooms.len());
    place_group(
        builder,
        &req.bathrooms,
        &bath_slots,
        RoomType::Bathroom,
        pad,
        Edge::Left,
        Some(Swing::Cw),
    );

    builder.add_corridors(&zones.corridors);

    let common_slots = zones.public.columns(req.common_areas.len());
    place_group(
        builder,
        &req.common_areas,
        &common_slots,
        RoomType::Common,
        pad,
        Edge::Top,
        None,
    );
}

/// Bedrooms stacked in the left strip opening onto the vertical corridor
/// leg; bathrooms above and common areas below the horizontal leg.
pub fn place_l_shaped(
    builder: &mut FloorPlanBuilder,
    req: &UserRequirements,
    zones: &ZonePlan,
    params: &LayoutParams,
) {
    let pad = params.room_padding;
    let bed_door = DoorSpec {
        edge: Edge::Right,
        offset: CENTERED_DOOR_OFFSET,
    };
    let slots = zones.bedrooms.rows(req.bedrooms.len());
    for (i, (cfg, slot)) in req.bedrooms.iter().zip(&slots).enumerate() {
        place_bedroom(builder, cfg, i, slot, pad, CarveSide::Left, bed_door);
    }

    let bath_slots = zones.bathrooms.columns(req.bathrooms.len());
    place_group(
        builder,
        &req.bathrooms,
        &bath_slots,
        RoomType::Bathroom,
        pad,
        Edge::Bottom,
        None,
    );

    builder.add_corridors(&zones.corridors);

    let common_slots = zones.public.columns(req.common_areas.len());
    place_group(
        builder,
        &req.common_areas,
        &common_slots,
        RoomType::Common,
        pad,
        Edge::Top,
        None,
    );
}

/// Master bedroom alone on the left, the rest stacked on the right, both
/// opening toward the central column of bathrooms, corridor and commons.
pub fn place_split(
    builder: &mut FloorPlanBuilder,
    req: &UserRequirements,
    zones: &ZonePlan,
    params: &LayoutParams,
) {
    let pad = params.room_padding;

    if let Some((master, secondary)) = req.bedrooms.split_first() {
        let master_door = DoorSpec {
            edge: Edge::Right,
            offset: CENTERED_DOOR_OFFSET,
        };
        place_bedroom(builder, master, 0, &zones.bedrooms, pad, CarveSide::Left, master_door);

        if let Some(zone) = zones.secondary_bedrooms {
            let secondary_door = DoorSpec {
                edge: Edge::Left,
                offset: CENTERED_DOOR_OFFSET,
            };
            let slots = zone.rows(secondary.len());
            for (i, (cfg, slot)) in secondary.iter().zip(&slots).enumerate() {
                place_bedroom(builder, cfg, i + 1, slot, pad, CarveSide::Right, secondary_door);
            }
        }
    }

    let bath_slots = zones.bathrooms.columns(req.bathrooms.len());
    place_group(
        builder,
        &req.bathrooms,
        &bath_slots,
        RoomType::Bathroom,
        pad,
        Edge::Bottom,
        None,
    );

    builder.add_corridors(&zones.corridors);

    let common_slots = zones.public.columns(req.common_areas.len());
    place_group(
        builder,
        &req.common_areas,
        &common_slots,
        RoomType::Common,
        pad,
        Edge::Top,
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    const EPS: f32 = 1e-4;

    fn bedroom_slot() -> Rect {
        Rect::new(0.15, 0.15, 6.0, 4.0)
    }

    #[test]
    fn bedroom_without_ensuite_fills_inset_slot() {
        let mut b = FloorPlanBuilder::new(12.0, 10.0);
        let cfg = RoomConfig::bedroom("bed", "Bedroom");
        let door = DoorSpec {
            edge: Edge::Bottom,
            offset: 0.25,
        };
        place_bedroom(&mut b, &cfg, 1, &bedroom_slot(), 0.1, CarveSide::Right, door);
        let plan = b.build();
        assert_eq!(plan.rooms.len(), 1);
        let bed = &plan.rooms[0];
        assert!((bed.x - 0.2).abs() < EPS);
        assert!((bed.w - 5.9).abs() < EPS);
        assert_eq!(bed.has_ensuite, Some(false));
        assert_eq!(bed.doors[0].swing, Swing::Ccw);
        assert!((bed.doors[0].x - (bed.x + 0.25 * bed.w)).abs() < EPS);
        assert!((bed.doors[0].y - bed.bottom()).abs() < EPS);
    }

    #[test]
    fn right_carve_puts_ensuite_against_slot_edge() {
        let mut b = FloorPlanBuilder::new(12.0, 10.0);
        let cfg = RoomConfig::master_bedroom("master", "Master");
        let door = DoorSpec {
            edge: Edge::Bottom,
            offset: 0.25,
        };
        let slot = bedroom_slot();
        place_bedroom(&mut b, &cfg, 0, &slot, 0.1, CarveSide::Right, door);
        let plan = b.build();
        let (bed, ensuite) = (&plan.rooms[0], &plan.rooms[1]);

        assert_eq!(ensuite.room_type, RoomType::Ensuite);
        assert_eq!(ensuite.id, "master-ensuite");
        assert_eq!(ensuite.label, "Master Ensuite");
        assert!((ensuite.w - 1.8).abs() < EPS);
        assert!((ensuite.right() - (slot.right() - 0.05)).abs() < EPS);
        assert!((ensuite.h - 0.6 * bed.h).abs() < EPS);
        // Usable width loses the ensuite plus one padding gap
        assert!((bed.w - (5.9 - 1.8 - 0.1)).abs() < EPS);
        assert!((ensuite.x - bed.right() - 0.1).abs() < EPS);

        let ensuite_door = ensuite.doors[0];
        assert_eq!(ensuite_door.direction, Direction::Left);
        assert!((ensuite_door.x - ensuite.x).abs() < EPS);
        assert_eq!(bed.has_ensuite, Some(true));
    }

    #[test]
    fn left_carve_mirrors_ensuite() {
        let mut b = FloorPlanBuilder::new(12.0, 10.0);
        let cfg = RoomConfig::master_bedroom("master", "Master");
        let door = DoorSpec {
            edge: Edge::Right,
            offset: 0.5,
        };
        place_bedroom(&mut b, &cfg, 0, &bedroom_slot(), 0.1, CarveSide::Left, door);
        let plan = b.build();
        let (bed, ensuite) = (&plan.rooms[0], &plan.rooms[1]);
        assert!((ensuite.x - 0.2).abs() < EPS);
        assert!((bed.x - ensuite.right() - 0.1).abs() < EPS);
        assert_eq!(ensuite.doors[0].direction, Direction::Right);
        assert_eq!(bed.doors[0].direction, Direction::Right);
        assert!((bed.doors[0].x - bed.right()).abs() < EPS);
    }

    #[test]
    fn single_corridor_gets_plain_id() {
        let mut b = FloorPlanBuilder::new(12.0, 10.0);
        b.add_corridors(&[Rect::new(0.15, 4.0, 11.7, 1.0)]);
        let plan = b.build();
        assert_eq!(plan.rooms[0].id, "corridor");
        assert!(plan.rooms[0].doors.is_empty());
    }

    #[test]
    fn corridor_legs_are_numbered() {
        let mut b = FloorPlanBuilder::new(12.0, 10.0);
        b.add_corridors(&[Rect::new(0.0, 0.0, 1.0, 5.0), Rect::new(1.0, 2.0, 5.0, 1.0)]);
        let ids: Vec<_> = b.build().rooms.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["corridor-1", "corridor-2"]);
    }

    #[test]
    fn group_alternates_swing_unless_fixed() {
        let configs = vec![
            RoomConfig::common_area("a", "A"),
            RoomConfig::common_area("b", "B"),
        ];
        let slots = Rect::new(0.15, 5.0, 10.0, 4.0).columns(2);

        let mut b = FloorPlanBuilder::new(12.0, 10.0);
        place_group(&mut b, &configs, &slots, RoomType::Common, 0.1, Edge::Top, None);
        let swings: Vec<_> = b.build().rooms.iter().map(|r| r.doors[0].swing).collect();
        assert_eq!(swings, vec![Swing::Cw, Swing::Ccw]);

        let mut b = FloorPlanBuilder::new(12.0, 10.0);
        place_group(&mut b, &configs, &slots, RoomType::Bathroom, 0.1, Edge::Left, Some(Swing::Cw));
        let swings: Vec<_> = b.build().rooms.iter().map(|r| r.doors[0].swing).collect();
        assert_eq!(swings, vec![Swing::Cw, Swing::Cw]);
    }
}
