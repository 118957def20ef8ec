//! Requirement gate and three-variant generation.

use floorplan_logic::engine::{layout_floor_plan, LayoutVariant};
use floorplan_logic::geometry::validate_layout;
use floorplan_logic::model::{FloorPlanResult, UserRequirements};
use floorplan_logic::validation::{validate_requirements, ValidationError};

pub const VARIANT_COUNT: usize = LayoutVariant::ALL.len();

/// Lay out every variant, in order Linear, L-shaped, Split.
///
/// Does not validate: call [`plan`] unless the requirements are already
/// known to pass [`validate_requirements`].
pub fn generate(req: &UserRequirements) -> [FloorPlanResult; VARIANT_COUNT] {
    log::info!(
        "Generating {} layout variants for {}x{} m plot ({:?}, {} bedrooms, {} bathrooms, {} common areas)",
        VARIANT_COUNT,
        req.plot_width,
        req.plot_depth,
        req.style,
        req.bedrooms.len(),
        req.bathrooms.len(),
        req.common_areas.len()
    );

    LayoutVariant::ALL.map(|variant| {
        let result = layout_floor_plan(req, variant);
        log::debug!(
            "Variant {} ({}): {} rooms",
            variant.index(),
            variant.name(),
            result.rooms.len()
        );

        let issues = validate_layout(&result);
        if !issues.is_empty() {
            log::warn!(
                "Variant {} has {} geometry issue(s)",
                variant.name(),
                issues.len()
            );
            for issue in &issues {
                log::warn!("  [{}] {}", issue.category, issue.message);
            }
        }
        result
    })
}

/// Validate, then generate. A non-empty error list blocks generation.
pub fn plan(
    req: &UserRequirements,
) -> Result<[FloorPlanResult; VARIANT_COUNT], Vec<ValidationError>> {
    let errors = validate_requirements(req);
    if !errors.is_empty() {
        log::warn!(
            "Requirements rejected with {} validation error(s)",
            errors.len()
        );
        return Err(errors);
    }
    Ok(generate(req))
}
