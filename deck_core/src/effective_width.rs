//! # Effective Width - AISI S100-16
//!
//! Local-buckling reduction of thin compression elements by the effective
//! width method (AISI S100-16 Appendix 1, Section 1.1; legacy B2).
//!
//! Two element types are covered:
//! - uniformly compressed stiffened elements (flange flats), and
//! - webs under a linear stress gradient, where the effective width splits
//!   into two portions `be1`/`be2` per the code's distribution rule.
//!
//! Stresses are MPa, compression positive. These are pure element-level
//! functions; the stress-redistribution iteration lives in
//! [`crate::effective_section`].
//!
//! ## Example
//!
//! ```rust
//! use deck_core::effective_width::{effective_width_stiffened, K_STIFFENED};
//!
//! let r = effective_width_stiffened(100.0, 1.0, 345.0, 200_000.0, K_STIFFENED).unwrap();
//! assert!(r.lambda > 0.673);
//! assert!(r.be < 100.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};

/// Plate buckling coefficient for a stiffened element under uniform
/// compression (AISI S100-16 Eq. 1.1-4 condition)
pub const K_STIFFENED: f64 = 4.0;

/// Slenderness below which an element is fully effective (AISI Eq. 1.1-1)
pub const LAMBDA_LIMIT: f64 = 0.673;

/// Stress-ratio threshold in the web `be2` distribution rule
/// (AISI S100-16 1.1.2)
const PSI_SPLIT_LIMIT: f64 = -0.236;

/// Effective width of a single uniformly compressed element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveWidthResult {
    /// Nominal flat width (mm)
    pub w: f64,
    /// Thickness (mm)
    pub t: f64,
    /// Edge compression stress (MPa)
    pub f: f64,
    /// Plate buckling coefficient used
    pub k: f64,
    /// Slenderness parameter λ
    pub lambda: f64,
    /// Reduction factor ρ, in (0, 1]
    pub rho: f64,
    /// Effective width ρ·w (mm), never exceeding `w`
    pub be: f64,
}

/// Effective widths of a web under a linear stress gradient.
///
/// `be1` is adjacent to the more-compressed edge (`f1`), `be2` to the other
/// edge. When `be1 + be2` covers the whole compression zone the web is fully
/// effective and no reduction applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WebEffectiveWidths {
    /// Flat web width (mm)
    pub h: f64,
    /// Thickness (mm)
    pub t: f64,
    /// Compression stress at the more-compressed edge (MPa, > 0)
    pub f1: f64,
    /// Stress at the other edge (MPa; negative means tension)
    pub f2: f64,
    /// Stress ratio ψ = f2/f1
    pub psi: f64,
    /// Gradient-dependent plate buckling coefficient k(ψ)
    pub k: f64,
    /// Slenderness parameter λ
    pub lambda: f64,
    /// Reduction factor ρ
    pub rho: f64,
    /// Effective width adjacent to the `f1` edge (mm)
    pub be1: f64,
    /// Effective width adjacent to the `f2` edge (mm)
    pub be2: f64,
    /// Width of the compression zone of the flat (mm)
    pub compression_width: f64,
    /// True when the compression zone needs no reduction
    pub fully_effective: bool,
}

fn validate_positive(field: &str, value: f64) -> DeckResult<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(DeckError::invalid_input(
            field,
            value.to_string(),
            "Must be positive and finite",
        ));
    }
    Ok(())
}

/// Slenderness λ = (1.052/√k)(w/t)√(f/E)  (AISI S100-16 Eq. 1.1-4)
fn slenderness(w: f64, t: f64, f: f64, e: f64, k: f64) -> f64 {
    (1.052 / k.sqrt()) * (w / t) * (f / e).sqrt()
}

/// Reduction factor ρ = (1 − 0.22/λ)/λ, clipped to (0, 1]
/// (AISI S100-16 Eq. 1.1-2, 1.1-3)
fn reduction_factor(lambda: f64) -> f64 {
    if lambda <= LAMBDA_LIMIT {
        1.0
    } else {
        ((1.0 - 0.22 / lambda) / lambda).clamp(f64::MIN_POSITIVE, 1.0)
    }
}

/// Effective width of a stiffened compression element under uniform stress.
///
/// `k` is the plate buckling coefficient; pass [`K_STIFFENED`] (4.0) for a
/// stiffened element supported along both edges.
///
/// # Errors
///
/// All of `w`, `t`, `f`, `e`, `k` must be positive and finite.
pub fn effective_width_stiffened(
    w: f64,
    t: f64,
    f: f64,
    e: f64,
    k: f64,
) -> DeckResult<EffectiveWidthResult> {
    validate_positive("w", w)?;
    validate_positive("t", t)?;
    validate_positive("f", f)?;
    validate_positive("e", e)?;
    validate_positive("k", k)?;

    let lambda = slenderness(w, t, f, e, k);
    let rho = reduction_factor(lambda);
    Ok(EffectiveWidthResult {
        w,
        t,
        f,
        k,
        lambda,
        rho,
        be: rho * w,
    })
}

/// Effective widths of a web under a linear stress gradient
/// (AISI S100-16 1.1.2; legacy B2.3).
///
/// `f1` is the compression stress at the more-compressed edge (must be
/// positive); `f2` is the stress at the other edge, negative for tension.
///
/// For a partially compressed web (`ψ = f2/f1 < 0`):
/// - `k = 4 + 2(1−ψ)³ + 2(1−ψ)`
/// - `be` from λ computed with `f1` over the full flat width
/// - `be1 = be/(3−ψ)`
/// - `be2 = be/2` when `ψ < −0.236`, else `be − be1`
/// - `be1 + be2` is capped at the compression-zone width `h/(1−ψ)`
///
/// For `ψ ≥ 0` (whole web in compression) a single-region reduction applies:
/// `be1 = ρ·h`, `be2 = 0`.
pub fn effective_width_web_gradient(
    h: f64,
    t: f64,
    f1: f64,
    f2: f64,
    e: f64,
) -> DeckResult<WebEffectiveWidths> {
    validate_positive("h", h)?;
    validate_positive("t", t)?;
    validate_positive("f1", f1)?;
    validate_positive("e", e)?;
    if !f2.is_finite() {
        return Err(DeckError::invalid_input(
            "f2",
            f2.to_string(),
            "Must be finite",
        ));
    }
    if f2 > f1 {
        return Err(DeckError::invalid_input(
            "f2",
            f2.to_string(),
            "f1 must be the more-compressed edge (f2 <= f1)",
        ));
    }

    let psi = f2 / f1;
    let k = 4.0 + 2.0 * (1.0 - psi).powi(3) + 2.0 * (1.0 - psi);
    let lambda = slenderness(h, t, f1, e, k);
    let rho = reduction_factor(lambda);
    let be = rho * h;

    if psi >= 0.0 {
        // Whole web in compression: single-region reduction
        return Ok(WebEffectiveWidths {
            h,
            t,
            f1,
            f2,
            psi,
            k,
            lambda,
            rho,
            be1: be,
            be2: 0.0,
            compression_width: h,
            fully_effective: rho >= 1.0,
        });
    }

    let compression_width = h / (1.0 - psi);
    let be1 = be / (3.0 - psi);
    let be2 = if psi < PSI_SPLIT_LIMIT {
        be / 2.0
    } else {
        be - be1
    };

    // The split never claims more than the compression zone
    let fully_effective = be1 + be2 >= compression_width;
    let (be1, be2) = if fully_effective {
        (be1.min(compression_width), compression_width - be1.min(compression_width))
    } else {
        (be1, be2)
    };

    Ok(WebEffectiveWidths {
        h,
        t,
        f1,
        f2,
        psi,
        k,
        lambda,
        rho,
        be1,
        be2,
        compression_width,
        fully_effective,
    })
}
