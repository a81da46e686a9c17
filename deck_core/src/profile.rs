//! # Profile Geometry Extractor
//!
//! Converts a digitized 2D cross-section (an ordered polyline of one or more
//! repeating rib units, coordinates in mm) into a parametric
//! [`DeckGeometry`]. The digitization source (DXF reader etc.) is external;
//! this module only consumes its vertex output.
//!
//! Segments are classified by slope: near-horizontal segments are flange
//! flats, clearly inclined segments are webs. A profile that has no flat at
//! the top or bottom, a degenerate web slope, or too few vertices is rejected
//! with [`DeckError::InvalidProfile`] carrying a readable reason - never a
//! panic.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::profile::{extract_profile, ExtractorConfig, Point2};
//!
//! // One trapezoidal rib: half top flat, web down, bottom flat, web up,
//! // half top flat. 152.4 mm pitch, 50.8 mm deep.
//! let points = vec![
//!     Point2::new(0.0, 50.8),
//!     Point2::new(19.2, 50.8),
//!     Point2::new(57.2, 0.0),
//!     Point2::new(95.2, 0.0),
//!     Point2::new(133.2, 50.8),
//!     Point2::new(152.4, 50.8),
//! ];
//! let geom = extract_profile(&points, 0.9, &ExtractorConfig::default()).unwrap();
//! assert!((geom.hr - 50.8).abs() < 1e-9);
//! assert!((geom.pitch - 152.4).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::geometry::DeckGeometry;

/// A 2D point in the digitized cross-section (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }
}

/// Tolerances for segment classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Angular epsilon (degrees): segments within this of horizontal are
    /// flats, within this of vertical are degenerate webs.
    pub angle_tolerance_deg: f64,

    /// Assumed width of the digitized unit strip (mm). The derived pitch
    /// must not exceed it.
    pub unit_strip_width: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            angle_tolerance_deg: 2.0,
            unit_strip_width: 1000.0,
        }
    }
}

impl ExtractorConfig {
    /// Builder-style override of the angular tolerance
    pub fn with_angle_tolerance(mut self, deg: f64) -> Self {
        self.angle_tolerance_deg = deg;
        self
    }
}

/// Classification of a polyline segment by slope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    /// Near-horizontal flange flat
    Flat,
    /// Clearly inclined web
    Web,
    /// Near-vertical (degenerate for a roll-formed profile)
    Steep,
}

/// One classified segment of the digitized outline
#[derive(Debug, Clone, Copy)]
struct Segment {
    kind: SegmentKind,
    /// Inclination from horizontal (degrees, 0..=90)
    angle_deg: f64,
    /// Horizontal extent (mm)
    dx: f64,
    /// Mean elevation of the two endpoints (mm)
    y_mid: f64,
}

fn classify_segments(points: &[Point2], tol_deg: f64) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));
    for pair in points.windows(2) {
        let dx = pair[1].x - pair[0].x;
        let dy = pair[1].y - pair[0].y;
        let len = (dx * dx + dy * dy).sqrt();
        if len < 1e-9 {
            continue; // duplicate vertex
        }
        let angle_deg = dy.abs().atan2(dx.abs()).to_degrees();
        let kind = if angle_deg <= tol_deg {
            SegmentKind::Flat
        } else if angle_deg >= 90.0 - tol_deg {
            SegmentKind::Steep
        } else {
            SegmentKind::Web
        };
        segments.push(Segment {
            kind,
            angle_deg,
            dx: dx.abs(),
            y_mid: (pair[0].y + pair[1].y) / 2.0,
        });
    }
    segments
}

/// Extract a parametric [`DeckGeometry`] from a digitized rib outline.
///
/// `points` is the ordered polyline of one or more repeating rib units;
/// `t` is the base metal thickness (mm). The number of repeating units is
/// inferred from the count of bottom-flange flats, and the pitch is the
/// horizontal extent divided by that count.
///
/// # Errors
///
/// Returns [`DeckError::InvalidProfile`] when the outline cannot be
/// interpreted as a deck profile:
/// - fewer than 4 vertices
/// - no near-horizontal flat at the top or bottom of the section
/// - a near-vertical (degenerate) web segment
/// - derived widths violating the [`DeckGeometry`] invariants
pub fn extract_profile(
    points: &[Point2],
    t: f64,
    config: &ExtractorConfig,
) -> DeckResult<DeckGeometry> {
    if points.len() < 4 {
        return Err(DeckError::invalid_profile(format!(
            "profile has {} vertices; at least 4 are required",
            points.len()
        )));
    }
    if t <= 0.0 {
        return Err(DeckError::invalid_input(
            "t",
            t.to_string(),
            "Thickness must be positive",
        ));
    }

    let segments = classify_segments(points, config.angle_tolerance_deg);
    if let Some(steep) = segments.iter().find(|s| s.kind == SegmentKind::Steep) {
        return Err(DeckError::invalid_profile(format!(
            "web slope is degenerate: segment at {:.1} deg is within {:.1} deg of vertical",
            steep.angle_deg, config.angle_tolerance_deg
        )));
    }

    let flats: Vec<&Segment> = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Flat)
        .collect();
    let webs: Vec<&Segment> = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Web)
        .collect();

    if flats.is_empty() {
        return Err(DeckError::invalid_profile(
            "no near-horizontal flange segment found",
        ));
    }
    if webs.is_empty() {
        return Err(DeckError::invalid_profile(
            "no inclined web segment connects the flanges",
        ));
    }

    let y_top = flats.iter().map(|s| s.y_mid).fold(f64::MIN, f64::max);
    let y_bot = flats.iter().map(|s| s.y_mid).fold(f64::MAX, f64::min);
    let hr = y_top - y_bot;
    if hr <= t {
        return Err(DeckError::invalid_profile(
            "top and bottom flanges are at the same elevation; no rib depth",
        ));
    }

    // Flats within 5% of rib depth of an extreme level belong to that flange;
    // anything in between (an embossment or stiffener flat) is rejected.
    let band = 0.05 * hr;
    let mut top_flat_total = 0.0;
    let mut bottom_flats: Vec<f64> = Vec::new();
    for flat in &flats {
        if (flat.y_mid - y_top).abs() <= band {
            top_flat_total += flat.dx;
        } else if (flat.y_mid - y_bot).abs() <= band {
            bottom_flats.push(flat.dx);
        } else {
            return Err(DeckError::invalid_profile(format!(
                "flat segment at elevation {:.1} mm is neither a top nor a bottom flange",
                flat.y_mid
            )));
        }
    }
    if top_flat_total <= 0.0 {
        return Err(DeckError::invalid_profile(
            "no near-horizontal segment at the top of the section",
        ));
    }
    if bottom_flats.is_empty() {
        return Err(DeckError::invalid_profile(
            "no near-horizontal segment at the bottom of the section",
        ));
    }

    // One bottom flange per rib, so the repeat count is the bottom flat count.
    let n_ribs = bottom_flats.len();
    let x_min = points.iter().map(|p| p.x).fold(f64::MAX, f64::min);
    let x_max = points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
    let pitch = (x_max - x_min) / n_ribs as f64;
    if pitch <= 0.0 || pitch > config.unit_strip_width {
        return Err(DeckError::invalid_profile(format!(
            "derived rib pitch {pitch:.1} mm is outside the unit strip width"
        )));
    }

    let wr_bot = bottom_flats.iter().sum::<f64>() / n_ribs as f64;
    let wr_top = pitch - top_flat_total / n_ribs as f64;

    // Web angle: length-weighted mean inclination
    let web_len: f64 = webs
        .iter()
        .map(|s| s.dx / s.angle_deg.to_radians().cos())
        .sum();
    let theta = webs
        .iter()
        .map(|s| s.angle_deg * s.dx / s.angle_deg.to_radians().cos())
        .sum::<f64>()
        / web_len;

    let mut geom = DeckGeometry::new(hr, wr_top, wr_bot, pitch, t, theta);
    geom.n_ribs = n_ribs as u32;

    geom.validate().map_err(|e| {
        DeckError::invalid_profile(format!("derived geometry is not a valid deck profile: {e}"))
    })?;
    Ok(geom)
}
