//! Zone allocation.
//!
//! Splits the plot interior into bedroom, bathroom, corridor and public
//! zones for one layout variant. Zones are nominal slots: rooms placed in
//! them are inset by half the room padding, corridors are not.

use crate::constants::{
    L_SHAPED_BEDROOM_WIDTH_FRACTION, LINEAR_BEDROOM_WIDTH_FRACTION, SPLIT_CENTRAL_WIDTH_FRACTION,
    SPLIT_MASTER_WIDTH_FRACTION,
};
use crate::engine::{LayoutParams, LayoutVariant};

/// Axis-aligned rectangle in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrink by `padding / 2` on every side.
    pub fn inset(&self, padding: f32) -> Rect {
        let half = padding / 2.0;
        Rect::new(self.x + half, self.y + half, self.w - padding, self.h - padding)
    }

    /// `count` equal slots side by side, left to right.
    pub fn columns(&self, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let slot_w = self.w / count as f32;
        (0..count)
            .map(|i| Rect::new(self.x + i as f32 * slot_w, self.y, slot_w, self.h))
            .collect()
    }

    /// `count` equal slots stacked top to bottom.
    pub fn rows(&self, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let slot_h = self.h / count as f32;
        (0..count)
            .map(|i| Rect::new(self.x, self.y + i as f32 * slot_h, self.w, slot_h))
            .collect()
    }
}

/// Zone partition of the plot interior for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonePlan {
    /// Linear: full bedroom band. L-shaped: left strip. Split: master zone.
    pub bedrooms: Rect,
    /// Split only: zone for every bedroom after the first.
    pub secondary_bedrooms: Option<Rect>,
    pub bathrooms: Rect,
    /// One rectangle per corridor leg.
    pub corridors: Vec<Rect>,
    pub public: Rect,
}

/// Allocate zones for `variant`.
pub fn allocate_zones(
    variant: LayoutVariant,
    params: &LayoutParams,
    num_bathrooms: usize,
) -> ZonePlan {
    match variant {
        LayoutVariant::Linear => linear_zones(params, num_bathrooms),
        LayoutVariant::LShaped => l_shaped_zones(params),
        LayoutVariant::Split => split_zones(params),
    }
}

/// Private band on top, full-width corridor, public band below.
/// Standalone bathrooms take the right quarter of the private band.
fn linear_zones(p: &LayoutParams, num_bathrooms: usize) -> ZonePlan {
    let private_h = p.private_zone_h;
    let bedroom_w = if num_bathrooms > 0 {
        p.inner_w * LINEAR_BEDROOM_WIDTH_FRACTION
    } else {
        p.inner_w
    };
    let corridor_y = p.wall + private_h;
    let public_y = corridor_y + p.corridor_w;
    let public_h = p.inner_h - private_h - p.corridor_w;

    ZonePlan {
        bedrooms: Rect::new(p.wall, p.wall, bedroom_w, private_h),
        secondary_bedrooms: None,
        bathrooms: Rect::new(p.wall + bedroom_w, p.wall, p.inner_w - bedroom_w, private_h),
        corridors: vec![Rect::new(p.wall, corridor_y, p.inner_w, p.corridor_w)],
        public: Rect::new(p.wall, public_y, p.inner_w, public_h),
    }
}

/// Bedroom strip on the left, corridor bent into an L around the
/// bathroom band, public zone in the lower right.
fn l_shaped_zones(p: &LayoutParams) -> ZonePlan {
    let side_w = p.inner_w * L_SHAPED_BEDROOM_WIDTH_FRACTION;
    let right_x = p.wall + side_w + p.corridor_w;
    let right_w = p.inner_w - side_w - p.corridor_w;
    let leg_y = p.wall + p.private_zone_h;
    let public_y = leg_y + p.corridor_w;

    ZonePlan {
        bedrooms: Rect::new(p.wall, p.wall, side_w, p.inner_h),
        secondary_bedrooms: None,
        bathrooms: Rect::new(right_x, p.wall, right_w, p.private_zone_h),
        corridors: vec![
            Rect::new(p.wall + side_w, p.wall, p.corridor_w, p.inner_h),
            Rect::new(right_x, leg_y, right_w, p.corridor_w),
        ],
        public: Rect::new(right_x, public_y, right_w, p.wall + p.inner_h - public_y),
    }
}

/// Master on the left, secondary bedrooms on the right, bathrooms,
/// corridor and public rooms stacked in the central column.
fn split_zones(p: &LayoutParams) -> ZonePlan {
    let master_w = p.inner_w * SPLIT_MASTER_WIDTH_FRACTION;
    let central_w = p.inner_w * SPLIT_CENTRAL_WIDTH_FRACTION;
    let central_x = p.wall + master_w;
    let secondary_x = central_x + central_w;
    let corridor_y = p.wall + p.private_zone_h;
    let public_y = corridor_y + p.corridor_w;

    ZonePlan {
        bedrooms: Rect::new(p.wall, p.wall, master_w, p.inner_h),
        secondary_bedrooms: Some(Rect::new(
            secondary_x,
            p.wall,
            p.inner_w - master_w - central_w,
            p.inner_h,
        )),
        bathrooms: Rect::new(central_x, p.wall, central_w, p.private_zone_h),
        corridors: vec![Rect::new(central_x, corridor_y, central_w, p.corridor_w)],
        public: Rect::new(central_x, public_y, central_w, p.wall + p.inner_h - public_y),
    }
}
