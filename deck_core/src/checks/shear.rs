//! # Shear Strength - AISI S100-16 Section G2
//!
//! `Vn = Aw × Fv` per web, with the shear stress limit `Fv` selected by web
//! slenderness: yield, inelastic buckling, or elastic buckling. The result
//! carries the governing equation tag.

use crate::checks::{aisi_ref, CheckId, DesignCheckResult};
use crate::errors::{DeckError, DeckResult};
use crate::loads::DesignMethod;
use crate::material::STEEL_NU;

/// Resistance factor for shear (LRFD)
pub const PHI_V: f64 = 0.95;

/// Safety factor for shear (ASD)
pub const OMEGA_V: f64 = 1.60;

/// Shear buckling coefficient for an unreinforced web
pub const KV_UNREINFORCED: f64 = 5.34;

/// Check shear strength of one deck web.
///
/// # Arguments
///
/// * `h` - flat web depth (mm)
/// * `t` - thickness (mm)
/// * `fy` - yield strength (MPa)
/// * `e` - modulus of elasticity (MPa)
/// * `vu` - shear demand per web (kN)
/// * `method` - design method
pub fn check_shear_strength(
    h: f64,
    t: f64,
    fy: f64,
    e: f64,
    vu: f64,
    method: DesignMethod,
) -> DeckResult<DesignCheckResult> {
    for (field, value) in [("h", h), ("t", t), ("fy", fy), ("e", e)] {
        if value <= 0.0 || !value.is_finite() {
            return Err(DeckError::invalid_input(
                field,
                value.to_string(),
                "Must be positive and finite",
            ));
        }
    }
    if !vu.is_finite() || vu < 0.0 {
        return Err(DeckError::invalid_input(
            "vu",
            vu.to_string(),
            "Shear demand must be finite and non-negative",
        ));
    }

    let ht = h / t;
    let limit_yield = (KV_UNREINFORCED * e / fy).sqrt();
    let limit_inelastic = 1.51 * limit_yield;

    let (fv, equation) = if ht <= limit_yield {
        (0.60 * fy, aisi_ref::SHEAR_YIELD_EQ)
    } else if ht <= limit_inelastic {
        (
            0.60 * (KV_UNREINFORCED * e * fy).sqrt() / ht,
            aisi_ref::SHEAR_INELASTIC_EQ,
        )
    } else {
        (
            std::f64::consts::PI.powi(2) * KV_UNREINFORCED * e
                / (12.0 * (1.0 - STEEL_NU.powi(2)) * ht.powi(2)),
            aisi_ref::SHEAR_ELASTIC_EQ,
        )
    };

    // Vn = Aw Fv: mm² x MPa = N; to kN per web
    let aw = h * t;
    let vn = aw * fv / 1000.0;
    let capacity = method.design_capacity(vn, PHI_V, OMEGA_V);

    Ok(DesignCheckResult::new(
        CheckId::Shear,
        vu,
        capacity,
        equation,
        aisi_ref::SHEAR,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stocky_web_yields() {
        // h/t = 20, far below √(5.34 E / Fy) ≈ 68: Fv = 0.6 Fy
        let r = check_shear_strength(20.0, 1.0, 230.0, 200_000.0, 1.0, DesignMethod::Lrfd)
            .unwrap();
        assert_eq!(r.equation, aisi_ref::SHEAR_YIELD_EQ);
        // Vn = 20 x 1 x 138 / 1000 = 2.76 kN; φVn = 2.622
        assert!((r.capacity - 0.95 * 2.76).abs() < 1e-3);
    }

    #[test]
    fn test_intermediate_web_inelastic() {
        // √(5.34 x 200000/230) = 68.1; 1.51 x 68.1 = 102.9. h/t = 80 lands
        // in the inelastic regime.
        let r = check_shear_strength(80.0, 1.0, 230.0, 200_000.0, 1.0, DesignMethod::Lrfd)
            .unwrap();
        assert_eq!(r.equation, aisi_ref::SHEAR_INELASTIC_EQ);
    }

    #[test]
    fn test_slender_web_elastic() {
        let r = check_shear_strength(150.0, 1.0, 230.0, 200_000.0, 1.0, DesignMethod::Lrfd)
            .unwrap();
        assert_eq!(r.equation, aisi_ref::SHEAR_ELASTIC_EQ);
        // Elastic Fv = π² k E / (12(1-ν²)(h/t)²) = 42.9 MPa
        let fv = r.capacity / 0.95 / (150.0 * 1.0 / 1000.0);
        assert!((fv - 42.9).abs() < 0.5);
    }

    #[test]
    fn test_capacity_decreases_with_slenderness() {
        // Fv never increases as the web grows more slender
        let mut last_fv = f64::INFINITY;
        for h in [30.0, 60.0, 90.0, 120.0, 180.0] {
            let r = check_shear_strength(h, 1.0, 230.0, 200_000.0, 1.0, DesignMethod::Lrfd)
                .unwrap();
            let fv = r.capacity / 0.95 / (h * 1.0 / 1000.0);
            assert!(fv <= last_fv + 1e-9, "Fv must not increase (h = {h})");
            last_fv = fv;
        }
    }

    #[test]
    fn test_asd_divides() {
        let lrfd = check_shear_strength(50.0, 1.0, 230.0, 200_000.0, 1.0, DesignMethod::Lrfd)
            .unwrap();
        let asd = check_shear_strength(50.0, 1.0, 230.0, 200_000.0, 1.0, DesignMethod::Asd)
            .unwrap();
        let vn = lrfd.capacity / PHI_V;
        assert!((asd.capacity - vn / OMEGA_V).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(check_shear_strength(0.0, 1.0, 230.0, 200_000.0, 1.0, DesignMethod::Lrfd)
            .is_err());
        assert!(
            check_shear_strength(50.0, 1.0, 230.0, 200_000.0, -1.0, DesignMethod::Lrfd).is_err()
        );
    }
}
