//! # Effective Section Properties
//!
//! Stress-dependent effective section properties per the AISI S100-16
//! effective width method. The actual stress in a partially-effective
//! section depends on the reduced geometry, and the reduction depends on
//! stress, so the two are solved by a bounded fixed-point iteration:
//!
//! 1. assume stresses from the current neutral axis (extreme compression
//!    fiber at Fy),
//! 2. reduce the compression flange and web by their effective widths,
//! 3. recompute the neutral axis from the reduced plate segments,
//! 4. repeat until the neutral-axis shift is below tolerance or the
//!    iteration cap is reached.
//!
//! Hitting the cap is not an error: the last iterate is returned tagged
//! [`ConvergenceStatus::NotConverged`] and the caller decides whether to
//! warn or reject.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::geometry::DeckGeometry;
//! use deck_core::material::DeckMaterial;
//! use deck_core::effective_section::{effective_properties, ConvergenceConfig, Orientation};
//!
//! let geom = DeckGeometry::new(50.8, 114.0, 38.0, 152.4, 0.9, 80.0);
//! let mat = DeckMaterial::default();
//! let eff = effective_properties(&geom, &mat, Orientation::PositiveMoment,
//!                                &ConvergenceConfig::default()).unwrap();
//! assert!(eff.convergence.is_converged());
//! assert!(eff.properties.i <= eff.gross.i);
//! ```

use serde::{Deserialize, Serialize};

use crate::effective_width::{
    effective_width_stiffened, effective_width_web_gradient, EffectiveWidthResult,
    WebEffectiveWidths, K_STIFFENED,
};
use crate::errors::{DeckError, DeckResult};
use crate::geometry::DeckGeometry;
use crate::material::DeckMaterial;
use crate::section::{combine_segments, gross_properties, PlateSegment, SectionProperties};

/// Bending orientation of the deck.
///
/// Effective properties differ by orientation because the compression
/// flange swaps sides: positive moment (tension at bottom) compresses the
/// top flange, negative moment the bottom flange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Tension at bottom, compression in the top flange
    PositiveMoment,
    /// Tension at top, compression in the bottom flange
    NegativeMoment,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::PositiveMoment, Orientation::NegativeMoment];

    pub fn display_name(&self) -> &'static str {
        match self {
            Orientation::PositiveMoment => "Positive Moment",
            Orientation::NegativeMoment => "Negative Moment",
        }
    }
}

/// Convergence settings for the effective-width iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceConfig {
    /// Neutral-axis shift tolerance as a fraction of the rib height
    pub tolerance_ratio: f64,

    /// Hard iteration cap
    pub max_iterations: u32,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        ConvergenceConfig {
            tolerance_ratio: 0.001,
            max_iterations: 10,
        }
    }
}

impl ConvergenceConfig {
    pub fn with_tolerance_ratio(mut self, ratio: f64) -> Self {
        self.tolerance_ratio = ratio;
        self
    }

    pub fn with_max_iterations(mut self, cap: u32) -> Self {
        self.max_iterations = cap;
        self
    }
}

/// Outcome of the fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ConvergenceStatus {
    /// Neutral-axis shift fell below tolerance
    Converged { iterations: u32 },
    /// Iteration cap reached; values are the last iterate
    NotConverged { iterations: u32, residual: f64 },
}

impl ConvergenceStatus {
    pub fn is_converged(&self) -> bool {
        matches!(self, ConvergenceStatus::Converged { .. })
    }

    pub fn iterations(&self) -> u32 {
        match self {
            ConvergenceStatus::Converged { iterations }
            | ConvergenceStatus::NotConverged { iterations, .. } => *iterations,
        }
    }
}

/// Effective section properties for one bending orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveSection {
    /// Orientation these properties apply to
    pub orientation: Orientation,

    /// Gross (un-reduced) properties, for reference and for `i_deflection`
    pub gross: SectionProperties,

    /// Converged effective properties
    pub properties: SectionProperties,

    /// Effective section modulus at the compression fiber, Ie / y_c (mm³/m).
    /// This is the `Se` consumed by the flexural strength check.
    pub se: f64,

    /// Deflection moment of inertia, the SDI average (Ig + Ie)/2 (mm⁴/m)
    pub i_deflection: f64,

    /// Compression-flange reduction at the converged state
    pub flange: EffectiveWidthResult,

    /// Web gradient reduction at the converged state
    pub web: WebEffectiveWidths,

    /// Convergence tag with the iteration count reached
    pub convergence: ConvergenceStatus,
}

/// Effective plate segments for one web, with the ineffective portion of the
/// compression zone removed.
///
/// Distances along the flat are converted to vertical extents through
/// `sin θ`; corner regions beyond the flat are kept effective so that a
/// fully-effective web reproduces the gross segment exactly.
fn web_segments(
    geom: &DeckGeometry,
    web: &WebEffectiveWidths,
    comp_at_top: bool,
) -> Vec<PlateSegment> {
    if web.fully_effective {
        return vec![PlateSegment::inclined(0.0, geom.hr, geom.t, geom.theta)];
    }

    let sin_t = geom.theta.to_radians().sin();
    // Elevation of the flat's compression-side end
    let c = geom.corner_radius() * sin_t;
    let hole_start = web.be1; // along the flat, from the compression end
    let hole_end = web.compression_width - web.be2;

    let (y_lo, y_hi) = if comp_at_top {
        let top = geom.hr - c;
        (top - hole_end * sin_t, top - hole_start * sin_t)
    } else {
        let bot = c;
        (bot + hole_start * sin_t, bot + hole_end * sin_t)
    };

    vec![
        PlateSegment::inclined(0.0, y_lo, geom.t, geom.theta),
        PlateSegment::inclined(y_hi, geom.hr, geom.t, geom.theta),
    ]
}

/// Compute effective section properties for one bending orientation.
///
/// The extreme compression fiber is taken at Fy (first yield), web edge
/// stresses follow the linear gradient through the current neutral axis,
/// and the neutral axis is re-solved until stationary.
pub fn effective_properties(
    geom: &DeckGeometry,
    material: &DeckMaterial,
    orientation: Orientation,
    config: &ConvergenceConfig,
) -> DeckResult<EffectiveSection> {
    geom.validate()?;
    material.validate()?;
    if config.max_iterations == 0 {
        return Err(DeckError::invalid_input(
            "max_iterations",
            "0",
            "Iteration cap must be at least 1",
        ));
    }

    let gross = gross_properties(geom)?;
    let fy = material.fy;
    let e = material.e;
    let t = geom.t;
    let h_flat = geom.web_flat_width();
    let sin_t = geom.theta.to_radians().sin();
    let c = geom.corner_radius() * sin_t;

    let comp_at_top = orientation == Orientation::PositiveMoment;
    let (comp_flat, tension_flat) = if comp_at_top {
        (geom.top_flat_width(), geom.bottom_flat_width())
    } else {
        (geom.bottom_flat_width(), geom.top_flat_width())
    };

    let mut ycg = gross.ycg;
    let mut state: Option<(SectionProperties, EffectiveWidthResult, WebEffectiveWidths)> = None;
    let mut status = ConvergenceStatus::NotConverged {
        iterations: 0,
        residual: f64::INFINITY,
    };

    for iteration in 1..=config.max_iterations {
        // Distance from the neutral axis to the compression extreme fiber
        let y_c = if comp_at_top { geom.hr - ycg } else { ycg };
        if y_c <= 0.0 || y_c >= geom.hr {
            return Err(DeckError::calculation_failed(
                "effective_properties",
                format!("neutral axis at {ycg:.2} mm leaves no compression zone"),
            ));
        }

        // Linear stress gradient, Fy at the compression fiber.
        // Web flat ends sit at elevations c and hr - c.
        let stress_at = |y: f64| -> f64 {
            if comp_at_top {
                fy * (y - ycg) / y_c
            } else {
                fy * (ycg - y) / y_c
            }
        };
        let (f1, f2) = if comp_at_top {
            (stress_at(geom.hr - c), stress_at(c))
        } else {
            (stress_at(c), stress_at(geom.hr - c))
        };
        if f1 <= 0.0 {
            return Err(DeckError::calculation_failed(
                "effective_properties",
                "web flat carries no compression; geometry is degenerate",
            ));
        }

        let flange = effective_width_stiffened(comp_flat, t, fy, e, K_STIFFENED)?;
        let web = effective_width_web_gradient(h_flat, t, f1, f2, e)?;

        // Rebuild the rib from effective segments
        let mut segments = Vec::with_capacity(6);
        let (comp_y, tension_y) = if comp_at_top {
            (geom.hr, 0.0)
        } else {
            (0.0, geom.hr)
        };
        segments.push(PlateSegment::flat(flange.be, t, comp_y));
        segments.push(PlateSegment::flat(tension_flat, t, tension_y));
        let web_parts = web_segments(geom, &web, comp_at_top);
        segments.extend_from_slice(&web_parts);
        segments.extend_from_slice(&web_parts); // two webs per rib

        let props = combine_segments(&segments, geom.ribs_per_meter(), geom.hr)?;
        let residual = (props.ycg - ycg).abs();
        ycg = props.ycg;
        state = Some((props, flange, web));

        if residual <= config.tolerance_ratio * geom.hr {
            status = ConvergenceStatus::Converged {
                iterations: iteration,
            };
            break;
        }
        status = ConvergenceStatus::NotConverged {
            iterations: iteration,
            residual,
        };
    }

    let (properties, flange, web) = state.ok_or_else(|| DeckError::Internal {
        message: "effective-width iteration produced no iterate".to_string(),
    })?;

    let y_comp = if comp_at_top {
        properties.y_top
    } else {
        properties.y_bot
    };
    let se = properties.i / y_comp;
    let i_deflection = (gross.i + properties.i) / 2.0;

    Ok(EffectiveSection {
        orientation,
        gross,
        properties,
        se,
        i_deflection,
        flange,
        web,
        convergence: status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typical_deck() -> DeckGeometry {
        DeckGeometry::new(50.8, 114.0, 38.0, 152.4, 0.9, 80.0)
    }

    #[test]
    fn test_converges_within_cap() {
        // Regression fixture: |f2/f1| stays near 1 for this section and the
        // iteration must converge well inside the default cap of 10.
        let eff = effective_properties(
            &typical_deck(),
            &DeckMaterial::default(),
            Orientation::PositiveMoment,
            &ConvergenceConfig::default(),
        )
        .unwrap();
        assert!(eff.convergence.is_converged());
        assert!(eff.convergence.iterations() <= 10);
    }

    #[test]
    fn test_effective_never_exceeds_gross() {
        for orientation in Orientation::ALL {
            let eff = effective_properties(
                &typical_deck(),
                &DeckMaterial::grade_50(),
                orientation,
                &ConvergenceConfig::default(),
            )
            .unwrap();
            assert!(eff.properties.area <= eff.gross.area + 1e-9);
            assert!(eff.properties.i <= eff.gross.i + 1e-6);
            assert!(eff.se > 0.0);
        }
    }

    #[test]
    fn test_compression_flange_reduced_at_grade_50() {
        // Higher yield stress raises λ; the 38.4 mm top flat must show a
        // real reduction at Fy = 345.
        let eff = effective_properties(
            &typical_deck(),
            &DeckMaterial::grade_50(),
            Orientation::PositiveMoment,
            &ConvergenceConfig::default(),
        )
        .unwrap();
        assert!(eff.flange.rho < 1.0);
        assert!(eff.flange.be < eff.flange.w);
    }

    #[test]
    fn test_deflection_inertia_is_sdi_average() {
        let eff = effective_properties(
            &typical_deck(),
            &DeckMaterial::default(),
            Orientation::PositiveMoment,
            &ConvergenceConfig::default(),
        )
        .unwrap();
        let expected = (eff.gross.i + eff.properties.i) / 2.0;
        assert!((eff.i_deflection - expected).abs() < 1e-6);
        assert!(eff.i_deflection <= eff.gross.i);
    }

    #[test]
    fn test_orientations_differ() {
        // Top and bottom flats differ (38.4 vs 38.0) so the two orientations
        // give different effective moduli.
        let pos = effective_properties(
            &typical_deck(),
            &DeckMaterial::grade_50(),
            Orientation::PositiveMoment,
            &ConvergenceConfig::default(),
        )
        .unwrap();
        let neg = effective_properties(
            &typical_deck(),
            &DeckMaterial::grade_50(),
            Orientation::NegativeMoment,
            &ConvergenceConfig::default(),
        )
        .unwrap();
        assert!((pos.se - neg.se).abs() > 1e-6);
    }

    #[test]
    fn test_capped_iteration_reports_not_converged() {
        // A zero tolerance with a one-iteration cap cannot converge on a
        // section whose flange is reduced.
        let config = ConvergenceConfig::default()
            .with_tolerance_ratio(0.0)
            .with_max_iterations(1);
        let eff = effective_properties(
            &typical_deck(),
            &DeckMaterial::grade_50(),
            Orientation::PositiveMoment,
            &config,
        )
        .unwrap();
        match eff.convergence {
            ConvergenceStatus::NotConverged {
                iterations,
                residual,
            } => {
                assert_eq!(iterations, 1);
                assert!(residual > 0.0);
            }
            ConvergenceStatus::Converged { .. } => panic!("expected NotConverged"),
        }
        // Last iterate is still usable
        assert!(eff.properties.i > 0.0);
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = ConvergenceConfig::default().with_max_iterations(0);
        let err = effective_properties(
            &typical_deck(),
            &DeckMaterial::default(),
            Orientation::PositiveMoment,
            &config,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let eff = effective_properties(
            &typical_deck(),
            &DeckMaterial::default(),
            Orientation::PositiveMoment,
            &ConvergenceConfig::default(),
        )
        .unwrap();
        let json = serde_json::to_string(&eff).unwrap();
        let roundtrip: EffectiveSection = serde_json::from_str(&json).unwrap();
        assert_eq!(eff, roundtrip);
    }
}
