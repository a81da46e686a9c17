//! # deck_core - Metal Deck Design Engine
//!
//! `deck_core` checks cold-formed steel floor deck for the construction
//! stage (wet concrete, before composite action) per AISI S100-16 and
//! SDI C-2017. All inputs and outputs are JSON-serializable, so the engine
//! drops into CLIs, services, and report generators without glue code.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Checks Never Panic on Demand**: a demand/capacity ratio above 1.0
//!   is a result, not an error
//!
//! Units are SI throughout: mm, MPa, kN, with per-meter-width section
//! properties. The engine performs no unit conversion.
//!
//! ## Quick Start
//!
//! ```rust
//! use deck_core::checks::{design_deck, DeckDesignInput};
//! use deck_core::geometry::DeckGeometry;
//! use deck_core::loads::ConstructionLoads;
//! use deck_core::material::DeckMaterial;
//!
//! let input = DeckDesignInput::new(
//!     DeckGeometry::new(50.8, 114.0, 38.0, 152.4, 0.9, 80.0),
//!     DeckMaterial::default(),
//!     2400.0,
//!     ConstructionLoads::new(2.5),
//! );
//! let summary = design_deck(&input).unwrap();
//! println!("{}", summary.format_table());
//! assert!(summary.all_pass);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Trapezoidal rib profile parameters
//! - [`profile`] - Deck profile extraction from digitized cross-sections
//! - [`material`] - Steel grades and properties
//! - [`section`] - Gross section properties from plate segments
//! - [`effective_width`] - AISI effective width reductions
//! - [`effective_section`] - Iterative effective section properties
//! - [`loads`] - Design method, span condition, construction loads
//! - [`checks`] - Limit-state checks and the design orchestrator
//! - [`errors`] - Structured error types

pub mod checks;
pub mod effective_section;
pub mod effective_width;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod material;
pub mod profile;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use checks::{design_deck, DeckDesignInput, DeckDesignSummary, DesignCheckResult};
pub use errors::{DeckError, DeckResult};
pub use geometry::DeckGeometry;
pub use material::DeckMaterial;
