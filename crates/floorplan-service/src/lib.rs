//! Floor-plan generation service.
//!
//! The only entry point external callers use: validate requirements, then
//! lay out all three variants in fixed order. Also defines the record the
//! persistence collaborator stores per project.

pub mod generation;
pub mod project;

pub use generation::{generate, plan, VARIANT_COUNT};
pub use project::ProjectSnapshot;
