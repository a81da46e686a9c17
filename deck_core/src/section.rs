//! # Section Properties
//!
//! Gross (un-reduced) section properties of a deck profile, per meter of
//! deck width. The rib cross-section is decomposed into thin plate segments
//! (flange flats and inclined webs) combined with the parallel-axis theorem
//! about the bottom-flange centerline.
//!
//! Effective (buckling-reduced) properties reuse the same plate-segment
//! machinery with reduced widths; see [`crate::effective_section`].

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::geometry::DeckGeometry;

/// Section properties per meter of deck width.
///
/// `ycg` is measured from the bottom-flange centerline; `y_top`/`y_bot` are
/// distances from the neutral axis to the extreme fibers, and the section
/// moduli are `I / y`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area": 1060.5,
///   "i": 422100.0,
///   "ycg": 25.46,
///   "y_top": 25.34,
///   "y_bot": 25.46,
///   "s_top": 16656.0,
///   "s_bot": 16583.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (mm²/m)
    pub area: f64,

    /// Moment of inertia about the neutral axis (mm⁴/m)
    pub i: f64,

    /// Neutral axis height above the bottom-flange centerline (mm)
    pub ycg: f64,

    /// Distance from neutral axis to the top extreme fiber (mm)
    pub y_top: f64,

    /// Distance from neutral axis to the bottom extreme fiber (mm)
    pub y_bot: f64,

    /// Section modulus referenced to the top fiber, I / y_top (mm³/m)
    pub s_top: f64,

    /// Section modulus referenced to the bottom fiber, I / y_bot (mm³/m)
    pub s_bot: f64,
}

/// A thin plate segment of the rib cross-section.
///
/// Flats carry their own-axis inertia `w t³ / 12` (negligible but included);
/// inclined webs carry `t (Δy)³ / (12 sin θ)`, the inertia of an inclined
/// plate expressed through its vertical extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateSegment {
    /// Segment area (mm² per rib)
    pub area: f64,
    /// Centroid height above the bottom-flange centerline (mm)
    pub y: f64,
    /// Moment of inertia about the segment's own centroidal axis (mm⁴)
    pub i_own: f64,
}

impl PlateSegment {
    /// Horizontal flange flat of width `w` at elevation `y`
    pub fn flat(w: f64, t: f64, y: f64) -> Self {
        PlateSegment {
            area: w * t,
            y,
            i_own: w * t.powi(3) / 12.0,
        }
    }

    /// Inclined web plate spanning the vertical extent `[y_lo, y_hi]` at
    /// inclination `theta_deg` from horizontal.
    pub fn inclined(y_lo: f64, y_hi: f64, t: f64, theta_deg: f64) -> Self {
        let dy = y_hi - y_lo;
        let sin_t = theta_deg.to_radians().sin();
        let length = dy / sin_t;
        PlateSegment {
            area: length * t,
            y: (y_lo + y_hi) / 2.0,
            i_own: t * dy.powi(3) / (12.0 * sin_t),
        }
    }
}

/// Combine plate segments into section properties.
///
/// `per_meter` scales per-rib quantities to a 1 m strip; `depth` is the
/// centerline depth of the section (extreme fibers at 0 and `depth`).
pub fn combine_segments(
    segments: &[PlateSegment],
    per_meter: f64,
    depth: f64,
) -> DeckResult<SectionProperties> {
    let area: f64 = segments.iter().map(|s| s.area).sum();
    if area <= 0.0 {
        return Err(DeckError::calculation_failed(
            "section_properties",
            "section has no area",
        ));
    }
    let ycg = segments.iter().map(|s| s.area * s.y).sum::<f64>() / area;
    let i: f64 = segments
        .iter()
        .map(|s| s.i_own + s.area * (s.y - ycg).powi(2))
        .sum();

    let y_top = depth - ycg;
    let y_bot = ycg;
    if y_top <= 0.0 || y_bot <= 0.0 {
        return Err(DeckError::calculation_failed(
            "section_properties",
            "neutral axis falls outside the section",
        ));
    }

    let i_m = i * per_meter;
    Ok(SectionProperties {
        area: area * per_meter,
        i: i_m,
        ycg,
        y_top,
        y_bot,
        s_top: i_m / y_top,
        s_bot: i_m / y_bot,
    })
}

/// Decompose one rib of the (gross) profile into plate segments.
///
/// Bottom flange at elevation 0, two webs over the full rib height, top
/// flange flat at `hr`. Centerline dimensions.
pub fn gross_segments(geom: &DeckGeometry) -> Vec<PlateSegment> {
    vec![
        PlateSegment::flat(geom.bottom_flat_width(), geom.t, 0.0),
        PlateSegment::inclined(0.0, geom.hr, geom.t, geom.theta),
        PlateSegment::inclined(0.0, geom.hr, geom.t, geom.theta),
        PlateSegment::flat(geom.top_flat_width(), geom.t, geom.hr),
    ]
}

/// Gross section properties of the un-reduced profile, per meter of width.
///
/// Pure function of the geometry; the only failure mode is an invalid
/// geometry input.
pub fn gross_properties(geom: &DeckGeometry) -> DeckResult<SectionProperties> {
    geom.validate()?;
    combine_segments(&gross_segments(geom), geom.ribs_per_meter(), geom.hr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typical_deck() -> DeckGeometry {
        DeckGeometry::new(50.8, 114.0, 38.0, 152.4, 0.9, 80.0)
    }

    #[test]
    fn test_gross_area() {
        let props = gross_properties(&typical_deck()).unwrap();
        // Per rib: (38 + 38.4 + 2 x 51.584) x 0.9 = 161.61 mm²
        // Per meter: 161.61 x 6.562 = 1060.5 mm²/m
        assert!((props.area - 1060.5).abs() < 1.0);
    }

    #[test]
    fn test_gross_centroid_and_inertia() {
        let props = gross_properties(&typical_deck()).unwrap();
        // Hand calc: ycg = 25.46 mm, I = 4.22e5 mm4/m
        assert!((props.ycg - 25.46).abs() < 0.05);
        assert!((props.i - 422_000.0).abs() < 2_000.0);
        assert!(props.s_top > 0.0 && props.s_bot > 0.0);
        assert!((props.y_top + props.y_bot - 50.8).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_profile_mirrors_extreme_fibers() {
        let geom = typical_deck();
        let props = gross_properties(&geom).unwrap();
        let mirrored = gross_properties(&geom.inverted()).unwrap();

        // Same material, same plate lengths: area and inertia unchanged,
        // extreme-fiber distances swap.
        assert!((props.area - mirrored.area).abs() < 1e-6);
        assert!((props.i - mirrored.i).abs() < 1e-3);
        assert!((props.y_top - mirrored.y_bot).abs() < 1e-6);
        assert!((props.y_bot - mirrored.y_top).abs() < 1e-6);
        assert!((props.s_top - mirrored.s_bot).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_geometry_propagates() {
        let mut geom = typical_deck();
        geom.t = -1.0;
        assert!(gross_properties(&geom).is_err());
    }

    #[test]
    fn test_serialization() {
        let props = gross_properties(&typical_deck()).unwrap();
        let json = serde_json::to_string(&props).unwrap();
        let roundtrip: SectionProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, roundtrip);
    }
}
