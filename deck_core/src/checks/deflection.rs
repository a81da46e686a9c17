//! # Construction-Stage Deflection - SDI C-2017
//!
//! Serviceability check on the bare deck under unfactored wet-concrete load.
//! Uses the SDI average inertia `Id = (Ig + Ie)/2` and the span-condition
//! deflection coefficient; the default limit is span/180.

use crate::checks::{aisi_ref, CheckId, DesignCheckResult};
use crate::errors::{DeckError, DeckResult};
use crate::loads::SpanCondition;

/// Default deflection limit denominator (span / 180)
pub const DEFAULT_DEFLECTION_LIMIT_RATIO: f64 = 180.0;

/// Check construction-stage deflection against the span/`limit_ratio` limit.
///
/// # Arguments
///
/// * `i_d` - deflection inertia, the SDI average (mm⁴/m)
/// * `e` - modulus of elasticity (MPa)
/// * `span_mm` - span length (mm)
/// * `w_service` - unfactored uniform load (kN/m²); per meter of deck width
///   this is numerically the line load in N/mm
/// * `limit_ratio` - limit denominator, normally 180
/// * `condition` - span condition selecting the deflection coefficient
pub fn check_deflection(
    i_d: f64,
    e: f64,
    span_mm: f64,
    w_service: f64,
    limit_ratio: f64,
    condition: SpanCondition,
) -> DeckResult<DesignCheckResult> {
    for (field, value) in [
        ("i_d", i_d),
        ("e", e),
        ("span_mm", span_mm),
        ("limit_ratio", limit_ratio),
    ] {
        if value <= 0.0 || !value.is_finite() {
            return Err(DeckError::invalid_input(
                field,
                value.to_string(),
                "Must be positive and finite",
            ));
        }
    }
    if w_service < 0.0 || !w_service.is_finite() {
        return Err(DeckError::invalid_input(
            "w_service",
            w_service.to_string(),
            "Service load must be finite and non-negative",
        ));
    }

    // kN/m² over a 1 m strip = N/mm line load
    let w_line = w_service;
    let delta = condition.deflection_coefficient() * w_line * span_mm.powi(4) / (e * i_d);
    let limit = span_mm / limit_ratio;

    Ok(DesignCheckResult::new(
        CheckId::Deflection,
        delta,
        limit,
        format!("Δ = {:.5} w L⁴ / (E Id)", condition.deflection_coefficient()),
        aisi_ref::DEFLECTION,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_span_hand_calc() {
        // Δ = 5/384 x 2.5 x 2400⁴ / (200000 x 420000) = 12.86 mm
        // Limit = 2400/180 = 13.33 mm
        let r = check_deflection(
            420_000.0,
            200_000.0,
            2400.0,
            2.5,
            180.0,
            SpanCondition::Simple,
        )
        .unwrap();
        assert!((r.demand - 12.86).abs() < 0.05);
        assert!((r.capacity - 13.333).abs() < 0.01);
        assert!(r.passes);
    }

    #[test]
    fn test_continuous_spans_deflect_less() {
        let simple = check_deflection(
            420_000.0,
            200_000.0,
            2400.0,
            2.5,
            180.0,
            SpanCondition::Simple,
        )
        .unwrap();
        let two = check_deflection(
            420_000.0,
            200_000.0,
            2400.0,
            2.5,
            180.0,
            SpanCondition::TwoSpan,
        )
        .unwrap();
        let three = check_deflection(
            420_000.0,
            200_000.0,
            2400.0,
            2.5,
            180.0,
            SpanCondition::ThreeSpan,
        )
        .unwrap();
        assert!(two.demand < simple.demand);
        assert!(three.demand < simple.demand);
        // 1/145 > 1/185: three-span deflects more than two-span
        assert!(three.demand > two.demand);
    }

    #[test]
    fn test_long_span_fails() {
        // Deflection grows with L⁴ while the limit grows with L
        let r = check_deflection(
            420_000.0,
            200_000.0,
            4000.0,
            2.5,
            180.0,
            SpanCondition::Simple,
        )
        .unwrap();
        assert!(!r.passes);
    }

    #[test]
    fn test_tighter_limit_ratio() {
        let l180 = check_deflection(
            420_000.0,
            200_000.0,
            2400.0,
            2.5,
            180.0,
            SpanCondition::Simple,
        )
        .unwrap();
        let l360 = check_deflection(
            420_000.0,
            200_000.0,
            2400.0,
            2.5,
            360.0,
            SpanCondition::Simple,
        )
        .unwrap();
        assert!((l360.capacity - l180.capacity / 2.0).abs() < 1e-9);
        assert!(!l360.passes);
    }

    #[test]
    fn test_zero_load_passes_trivially() {
        let r = check_deflection(
            420_000.0,
            200_000.0,
            2400.0,
            0.0,
            180.0,
            SpanCondition::Simple,
        )
        .unwrap();
        assert_eq!(r.demand, 0.0);
        assert!(r.passes);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(check_deflection(0.0, 200_000.0, 2400.0, 2.5, 180.0, SpanCondition::Simple)
            .is_err());
        assert!(check_deflection(
            420_000.0,
            200_000.0,
            2400.0,
            -1.0,
            180.0,
            SpanCondition::Simple
        )
        .is_err());
    }
}
