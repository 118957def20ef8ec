//! Pure floor-plan layout logic.
//!
//! Given a rectangular plot and an ordered list of requested rooms, this
//! crate validates the requirements and lays out the plot as labeled room
//! rectangles with one door each. Functions take plain data and return
//! plain data: no I/O, no randomness, no shared state.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Wall thickness, spacing, zone ratios, validation limits |
//! | [`doors`] | Door wall/offset rules and swing alternation |
//! | [`engine`] | Layout variants and per-variant orchestration |
//! | [`geometry`] | Post-generation checks (containment, overlap, doors) |
//! | [`model`] | Requirements, rooms, doors, floor-plan results |
//! | [`placement`] | Room placement per variant, ensuite carve-outs |
//! | [`summary`] | Per-plan counts, areas and utilization |
//! | [`validation`] | Requirement validation rules |
//! | [`zones`] | Zone allocation and rectangle subdivision |

pub mod constants;
pub mod doors;
pub mod engine;
pub mod geometry;
pub mod model;
pub mod placement;
pub mod summary;
pub mod validation;
pub mod zones;
