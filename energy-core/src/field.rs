use crate::grid::Grid;
use crate::params::{ParameterText, Parameters, ValidationError};

/// Energy values over a [`Grid`], row-major by y: `values[iy * n + ix]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    n: usize,
    half_width: f64,
    parameters: Parameters,
    values: Vec<f64>,
    min: f64,
    max: f64,
}

/// Parse the three input texts and evaluate the field over `grid`.
/// Nothing is computed when any text fails to parse.
pub fn compute_field(grid: &Grid, text: &ParameterText<'_>) -> Result<Field, ValidationError> {
    let parameters = text.parse()?;
    let field = Field::compute(grid, parameters);
    if !field.has_finite_range() {
        return Err(ValidationError::Overflow { parameters });
    }
    Ok(field)
}

impl Field {
    /// Whole-grid evaluation as an outer sum of a per-column term and a per-row term.
    pub fn compute(grid: &Grid, parameters: Parameters) -> Field {
        let n = grid.n();

        // 0.5·k·x² per column
        let col_terms: Vec<f64> = grid.xs().iter().map(|&x| parameters.elastic(x * x)).collect();
        // m·g·y + 0.5·k·y² per row
        let row_terms: Vec<f64> = grid
            .ys()
            .iter()
            .map(|&y| parameters.gravitational(y) + parameters.elastic(y * y))
            .collect();

        let values: Vec<f64> = row_terms
            .iter()
            .flat_map(|&r| col_terms.iter().map(move |&c| r + c))
            .collect();

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        log::debug!(
            "field {n}x{n} for m={} g={} k={}: range [{min:.4}, {max:.4}]",
            parameters.mass,
            parameters.gravity,
            parameters.spring
        );

        Field {
            n,
            half_width: grid.half_width(),
            parameters,
            values,
            min,
            max,
        }
    }

    // ---- Accessors ----
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// All values finite and `max - min` representable, so contour levels can be formed.
    pub fn has_finite_range(&self) -> bool {
        self.values.iter().all(|v| v.is_finite()) && (self.max - self.min).is_finite()
    }

    /// Value at x index `ix`, y index `iy`.
    pub fn at(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.n + ix]
    }

    /// Bilinear interpolation at domain point `(x, y)`, clamped to the domain.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let last = (self.n - 1) as f64;
        let dx = 2.0 * self.half_width / last;
        let fx = ((x + self.half_width) / dx).clamp(0.0, last);
        let fy = ((y + self.half_width) / dx).clamp(0.0, last);

        let x0 = (fx.floor() as usize).min(self.n - 2);
        let y0 = (fy.floor() as usize).min(self.n - 2);
        let tx = fx - x0 as f64;
        let ty = fy - y0 as f64;

        let v00 = self.at(x0, y0);
        let v10 = self.at(x0 + 1, y0);
        let v01 = self.at(x0, y0 + 1);
        let v11 = self.at(x0 + 1, y0 + 1);

        let bottom = v00 + (v10 - v00) * tx;
        let top = v01 + (v11 - v01) * tx;
        bottom + (top - bottom) * ty
    }
}
