//! Potential-energy field on a fixed square grid:
//! `U(x, y) = m·g·y + 0.5·k·(x² + y²)`.
//!
//! Front ends (desktop viewer, CLI, wasm) only parse text, call
//! [`compute_field`], and draw what [`rasterize`] gives them.

pub mod colormap;
pub mod contour;
pub mod field;
pub mod grid;
pub mod params;

pub use colormap::{band_color, viridis};
pub use contour::{ContourLevels, rasterize};
pub use field::{Field, compute_field};
pub use grid::Grid;
pub use params::{ParameterText, Parameters, Quantity, ValidationError};

// ---- Fixed domain (not user-configurable) ----

/// Points per axis.
pub const GRID_SIZE: usize = 100;
/// Domain is `[-DOMAIN_HALF_WIDTH, DOMAIN_HALF_WIDTH]` on both axes.
pub const DOMAIN_HALF_WIDTH: f64 = 5.0;
/// Filled-contour band count.
pub const CONTOUR_LEVELS: usize = 50;

pub const DEFAULT_MASS: &str = "1";
pub const DEFAULT_GRAVITY: &str = "9.81";
pub const DEFAULT_SPRING: &str = "1";
