//! Layout constants shared by every generated plan.
//!
//! All lengths are meters, all areas square meters.

/// Outer wall thickness. Every room sits inside this border.
pub const WALL_THICKNESS: f32 = 0.15;

// ── Style-dependent spacing ─────────────────────────────────────────────

pub const CORRIDOR_WIDTH_COMPACT: f32 = 1.0;
pub const CORRIDOR_WIDTH_SPACIOUS: f32 = 1.2;

/// Gap between neighbouring rooms; each rectangle is inset by half of it.
pub const ROOM_PADDING_COMPACT: f32 = 0.05;
pub const ROOM_PADDING_SPACIOUS: f32 = 0.15;

// ── Zone ratios per layout variant ──────────────────────────────────────

pub const LINEAR_PRIVATE_RATIO: f32 = 0.45;
pub const L_SHAPED_PRIVATE_RATIO: f32 = 0.50;
pub const SPLIT_PRIVATE_RATIO: f32 = 0.48;

/// Share of the inner width given to bedrooms in the linear layout when
/// standalone bathrooms need the remaining strip.
pub const LINEAR_BEDROOM_WIDTH_FRACTION: f32 = 0.75;
/// Width of the L-shaped bedroom strip.
pub const L_SHAPED_BEDROOM_WIDTH_FRACTION: f32 = 0.40;
pub const SPLIT_MASTER_WIDTH_FRACTION: f32 = 0.35;
pub const SPLIT_CENTRAL_WIDTH_FRACTION: f32 = 0.35;

// ── Ensuite carve-out ───────────────────────────────────────────────────

pub const ENSUITE_WIDTH_FRACTION: f32 = 0.30;
pub const ENSUITE_HEIGHT_FRACTION: f32 = 0.60;

// ── Door offsets (fraction along the door wall) ─────────────────────────

pub const LINEAR_BEDROOM_DOOR_OFFSET: f32 = 0.25;
pub const CENTERED_DOOR_OFFSET: f32 = 0.5;

// ── Validation limits ───────────────────────────────────────────────────

/// Rooms may use at most this share of the plot area.
pub const MAX_PLOT_COVERAGE: f32 = 0.95;
/// Smallest total room area considered livable.
pub const MIN_TOTAL_ROOM_AREA: f32 = 10.0;
/// Bathroom bounds apply regardless of the room's own min/max.
pub const BATHROOM_MIN_AREA: f32 = 4.0;
pub const BATHROOM_MAX_AREA: f32 = 15.0;
