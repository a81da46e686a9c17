//! # Combined Bending and Web Crippling - AISI S100-16 Section G6
//!
//! Interaction check at supports where the web carries a concentrated
//! reaction while the section is also bent. The utilization is the sum of
//! the flexure and crippling demand/capacity ratios, checked against the
//! interaction limit: 1.32 at interior supports (Eq. G6-1), 1.52 at end
//! supports (Eq. G6-2).

use crate::checks::web_crippling::LoadingCondition;
use crate::checks::{aisi_ref, CheckId, DesignCheckResult};
use crate::errors::{DeckError, DeckResult};

/// Interaction limit for interior supports
pub const INTERACTION_LIMIT_INTERIOR: f64 = 1.32;

/// Interaction limit for end supports
pub const INTERACTION_LIMIT_END: f64 = 1.52;

/// Check the combined bending + web crippling interaction.
///
/// Consumes already-computed flexure and web-crippling results; the loading
/// condition of the crippling result selects the interaction limit. When
/// either prerequisite result is missing the check cannot run and a
/// `MissingDependency` error is returned so the orchestrator can report the
/// omission.
pub fn check_combined_bending_crippling(
    flexure: Option<&DesignCheckResult>,
    crippling: Option<&DesignCheckResult>,
    loading: LoadingCondition,
) -> DeckResult<DesignCheckResult> {
    let flexure = flexure.ok_or_else(|| {
        DeckError::missing_dependency("Combined Bending & Crippling", "flexural check result")
    })?;
    let crippling = crippling.ok_or_else(|| {
        DeckError::missing_dependency("Combined Bending & Crippling", "web crippling check result")
    })?;

    if !flexure.check.is_flexure() {
        return Err(DeckError::invalid_input(
            "flexure",
            flexure.check.to_string(),
            "Expected a flexural check result",
        ));
    }
    if !crippling.check.is_web_crippling() {
        return Err(DeckError::invalid_input(
            "crippling",
            crippling.check.to_string(),
            "Expected a web crippling check result",
        ));
    }

    let (limit, equation) = if loading.is_end() {
        (INTERACTION_LIMIT_END, aisi_ref::COMBINED_END_EQ)
    } else {
        (INTERACTION_LIMIT_INTERIOR, aisi_ref::COMBINED_INTERIOR_EQ)
    };

    let utilization = flexure.ratio + crippling.ratio;

    Ok(DesignCheckResult::new(
        CheckId::CombinedBendingCrippling,
        utilization,
        limit,
        equation,
        aisi_ref::COMBINED,
    ))
}
