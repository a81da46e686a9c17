//! # Flexural Strength - AISI S100-16 Section F3.1
//!
//! `Mn = Se × Fy` using the orientation-appropriate effective section
//! modulus. LRFD applies φb = 0.90; ASD divides by Ωb = 1.67.

use crate::checks::{aisi_ref, CheckId, DesignCheckResult};
use crate::effective_section::Orientation;
use crate::errors::{DeckError, DeckResult};
use crate::loads::DesignMethod;

/// Resistance factor for flexure (LRFD)
pub const PHI_B: f64 = 0.90;

/// Safety factor for flexure (ASD)
pub const OMEGA_B: f64 = 1.67;

/// Check flexural strength for one bending orientation.
///
/// # Arguments
///
/// * `se` - effective section modulus for this orientation (mm³/m)
/// * `fy` - yield strength (MPa)
/// * `mu` - moment demand (kN-m/m)
/// * `orientation` - which flange is in compression
/// * `method` - design method (factors applied uniformly)
///
/// # Errors
///
/// `se` and `fy` must be positive; `mu` must be finite and non-negative.
pub fn check_flexural_strength(
    se: f64,
    fy: f64,
    mu: f64,
    orientation: Orientation,
    method: DesignMethod,
) -> DeckResult<DesignCheckResult> {
    if se <= 0.0 || !se.is_finite() {
        return Err(DeckError::invalid_input(
            "se",
            se.to_string(),
            "Effective section modulus must be positive",
        ));
    }
    if fy <= 0.0 {
        return Err(DeckError::invalid_input(
            "fy",
            fy.to_string(),
            "Yield strength must be positive",
        ));
    }
    if !mu.is_finite() || mu < 0.0 {
        return Err(DeckError::invalid_input(
            "mu",
            mu.to_string(),
            "Moment demand must be finite and non-negative",
        ));
    }

    // Mn = Se Fy: mm³/m x MPa = N-mm/m; to kN-m/m
    let mn = se * fy / 1.0e6;
    let capacity = method.design_capacity(mn, PHI_B, OMEGA_B);

    let check = match orientation {
        Orientation::PositiveMoment => CheckId::PositiveMoment,
        Orientation::NegativeMoment => CheckId::NegativeMoment,
    };
    Ok(DesignCheckResult::new(
        check,
        mu,
        capacity,
        aisi_ref::FLEXURE_EQ,
        aisi_ref::FLEXURE,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_strength() {
        // Se = 4500 mm³/m at Fy = 230: Mn = 1.035 kN-m/m, φMn = 0.9315
        let r = check_flexural_strength(
            4500.0,
            230.0,
            0.5,
            Orientation::PositiveMoment,
            DesignMethod::Lrfd,
        )
        .unwrap();
        assert!((r.capacity - 0.9315).abs() < 1e-4);
        assert_eq!(r.check, CheckId::PositiveMoment);
        assert!(r.passes);
    }

    #[test]
    fn test_overstressed_is_result_not_error() {
        let r = check_flexural_strength(
            4500.0,
            230.0,
            5.0,
            Orientation::PositiveMoment,
            DesignMethod::Lrfd,
        )
        .unwrap();
        assert!(!r.passes);
        assert!(r.ratio > 1.0);
    }

    #[test]
    fn test_lrfd_and_asd_ratios_differ() {
        // Same nominal capacity: φ multiplies, Ω divides, so ratios differ
        let lrfd = check_flexural_strength(
            4500.0,
            230.0,
            0.5,
            Orientation::PositiveMoment,
            DesignMethod::Lrfd,
        )
        .unwrap();
        let asd = check_flexural_strength(
            4500.0,
            230.0,
            0.5,
            Orientation::PositiveMoment,
            DesignMethod::Asd,
        )
        .unwrap();
        assert!((lrfd.ratio - asd.ratio).abs() > 1e-6);
        // φMn = 0.90 Mn > Mn/1.67
        assert!(lrfd.capacity > asd.capacity);
    }

    #[test]
    fn test_negative_orientation_tagged() {
        let r = check_flexural_strength(
            4100.0,
            230.0,
            0.5,
            Orientation::NegativeMoment,
            DesignMethod::Lrfd,
        )
        .unwrap();
        assert_eq!(r.check, CheckId::NegativeMoment);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(check_flexural_strength(
            0.0,
            230.0,
            0.5,
            Orientation::PositiveMoment,
            DesignMethod::Lrfd
        )
        .is_err());
        assert!(check_flexural_strength(
            4500.0,
            230.0,
            f64::NAN,
            Orientation::PositiveMoment,
            DesignMethod::Lrfd
        )
        .is_err());
    }
}
