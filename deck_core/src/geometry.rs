//! # Deck Geometry
//!
//! Parametric description of one repeating rib of a cold-formed metal deck
//! profile. Created either directly by a caller or by the profile extractor
//! ([`crate::profile`]) from a digitized cross-section.
//!
//! All linear dimensions are millimeters; angles are degrees from horizontal.
//! Values are per the convention that the deck repeats with period `pitch`
//! and a 1 m strip contains `1000 / pitch` ribs.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::geometry::DeckGeometry;
//!
//! // Typical 2" x 6" composite deck, 20 gage
//! let geom = DeckGeometry::new(50.8, 114.0, 38.0, 152.4, 0.9, 80.0);
//! assert!(geom.validate().is_ok());
//! assert!(geom.web_depth() > geom.hr);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};

/// Parametric metal deck rib geometry.
///
/// The rib is trapezoidal: a bottom flange of width `wr_bot`, two inclined
/// webs rising at `theta` degrees, and a top opening of width `wr_top`
/// between adjacent top flanges. The top flange flat between ribs is
/// therefore `pitch - wr_top`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "hr": 50.8,
///   "wr_top": 114.0,
///   "wr_bot": 38.0,
///   "pitch": 152.4,
///   "t": 0.9,
///   "theta": 80.0,
///   "n_ribs": 1
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckGeometry {
    /// Rib height (mm)
    pub hr: f64,

    /// Top rib opening width (mm)
    pub wr_top: f64,

    /// Bottom rib width (mm)
    pub wr_bot: f64,

    /// Rib pitch - horizontal repeat distance (mm)
    pub pitch: f64,

    /// Base metal thickness (mm)
    pub t: f64,

    /// Web inclination angle from horizontal (degrees)
    pub theta: f64,

    /// Number of ribs in the digitized strip (informational)
    #[serde(default = "default_n_ribs")]
    pub n_ribs: u32,
}

fn default_n_ribs() -> u32 {
    1
}

impl DeckGeometry {
    /// Create a new deck geometry. Call [`DeckGeometry::validate`] before use.
    pub fn new(hr: f64, wr_top: f64, wr_bot: f64, pitch: f64, t: f64, theta: f64) -> Self {
        DeckGeometry {
            hr,
            wr_top,
            wr_bot,
            pitch,
            t,
            theta,
            n_ribs: 1,
        }
    }

    /// Validate the geometry invariants:
    /// `0 < wr_bot <= wr_top < pitch`, `0 < theta <= 90`, `t > 0`, `hr > 0`.
    pub fn validate(&self) -> DeckResult<()> {
        if self.hr <= 0.0 {
            return Err(DeckError::invalid_input(
                "hr",
                self.hr.to_string(),
                "Rib height must be positive",
            ));
        }
        if self.t <= 0.0 {
            return Err(DeckError::invalid_input(
                "t",
                self.t.to_string(),
                "Thickness must be positive",
            ));
        }
        if self.wr_bot <= 0.0 {
            return Err(DeckError::invalid_input(
                "wr_bot",
                self.wr_bot.to_string(),
                "Bottom rib width must be positive",
            ));
        }
        if self.wr_bot > self.wr_top {
            return Err(DeckError::invalid_input(
                "wr_bot",
                self.wr_bot.to_string(),
                "Bottom rib width must not exceed top opening width",
            ));
        }
        if self.wr_top >= self.pitch {
            return Err(DeckError::invalid_input(
                "wr_top",
                self.wr_top.to_string(),
                "Top opening width must be less than rib pitch",
            ));
        }
        if self.theta <= 0.0 || self.theta > 90.0 {
            return Err(DeckError::invalid_input(
                "theta",
                self.theta.to_string(),
                "Web angle must be in (0, 90] degrees",
            ));
        }
        Ok(())
    }

    /// Inclined web length `hr / sin(theta)` (mm)
    pub fn web_depth(&self) -> f64 {
        self.hr / self.theta.to_radians().sin()
    }

    /// Flat width of the web element, net of corner radii (mm).
    ///
    /// Inside bend radius is taken as `2t`, typical for roll-formed deck.
    pub fn web_flat_width(&self) -> f64 {
        let r = self.corner_radius();
        (self.web_depth() - 2.0 * r).max(0.0)
    }

    /// Assumed inside bend radius `2t` (mm)
    pub fn corner_radius(&self) -> f64 {
        2.0 * self.t
    }

    /// Flat width of the top flange between adjacent rib openings (mm)
    pub fn top_flat_width(&self) -> f64 {
        self.pitch - self.wr_top
    }

    /// Flat width of the bottom flange (mm)
    pub fn bottom_flat_width(&self) -> f64 {
        self.wr_bot
    }

    /// Number of ribs per meter of deck width
    pub fn ribs_per_meter(&self) -> f64 {
        1000.0 / self.pitch
    }

    /// Number of webs per meter of deck width (two webs per rib)
    pub fn webs_per_meter(&self) -> f64 {
        2.0 * self.ribs_per_meter()
    }

    /// Return the profile mirrored about mid-height.
    ///
    /// The bottom flange of the mirror is the old top flange flat and vice
    /// versa, so `y_top`/`y_bot` of the mirrored section swap while area and
    /// moment of inertia are unchanged.
    pub fn inverted(&self) -> Self {
        DeckGeometry {
            wr_top: self.pitch - self.wr_bot,
            wr_bot: self.pitch - self.wr_top,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typical_deck() -> DeckGeometry {
        DeckGeometry::new(50.8, 114.0, 38.0, 152.4, 0.9, 80.0)
    }

    #[test]
    fn test_typical_deck_validates() {
        assert!(typical_deck().validate().is_ok());
    }

    #[test]
    fn test_invalid_rib_height() {
        let mut geom = typical_deck();
        geom.hr = 0.0;
        assert!(geom.validate().is_err());
    }

    #[test]
    fn test_invalid_width_ordering() {
        let mut geom = typical_deck();
        geom.wr_bot = 120.0; // exceeds wr_top = 114
        assert!(geom.validate().is_err());

        let mut geom = typical_deck();
        geom.wr_top = 160.0; // exceeds pitch = 152.4
        assert!(geom.validate().is_err());
    }

    #[test]
    fn test_invalid_theta() {
        let mut geom = typical_deck();
        geom.theta = 0.0;
        assert!(geom.validate().is_err());
        geom.theta = 95.0;
        assert!(geom.validate().is_err());
        geom.theta = 90.0;
        assert!(geom.validate().is_ok());
    }

    #[test]
    fn test_web_depth() {
        let geom = typical_deck();
        // hr / sin(80 deg) = 50.8 / 0.9848 = 51.58
        assert!((geom.web_depth() - 51.58).abs() < 0.01);
        // Flat width removes two 2t corners
        assert!((geom.web_flat_width() - (51.58 - 3.6)).abs() < 0.01);
    }

    #[test]
    fn test_flat_widths() {
        let geom = typical_deck();
        assert!((geom.top_flat_width() - 38.4).abs() < 1e-9);
        assert!((geom.bottom_flat_width() - 38.0).abs() < 1e-9);
    }

    #[test]
    fn test_ribs_per_meter() {
        let geom = typical_deck();
        assert!((geom.ribs_per_meter() - 6.562).abs() < 0.001);
        assert!((geom.webs_per_meter() - 13.123).abs() < 0.002);
    }

    #[test]
    fn test_inverted_swaps_flats() {
        let geom = typical_deck();
        let inv = geom.inverted();
        assert!(inv.validate().is_ok());
        assert!((inv.bottom_flat_width() - geom.top_flat_width()).abs() < 1e-9);
        assert!((inv.top_flat_width() - geom.bottom_flat_width()).abs() < 1e-9);
        // Mirroring twice returns the original
        let back = inv.inverted();
        assert!((back.wr_top - geom.wr_top).abs() < 1e-9);
        assert!((back.wr_bot - geom.wr_bot).abs() < 1e-9);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let geom = typical_deck();
        let json = serde_json::to_string(&geom).unwrap();
        let roundtrip: DeckGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(geom, roundtrip);
    }

    #[test]
    fn test_n_ribs_defaults_on_deserialize() {
        let json = r#"{"hr":50.8,"wr_top":114.0,"wr_bot":38.0,"pitch":152.4,"t":0.9,"theta":80.0}"#;
        let geom: DeckGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(geom.n_ribs, 1);
    }
}
