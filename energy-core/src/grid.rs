use crate::{DOMAIN_HALF_WIDTH, GRID_SIZE};

/// Square, origin-symmetric sampling of the domain. Same axis for x and y.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    n: usize,
    half_width: f64,
    dx: f64,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Grid {
    pub fn new(n: usize, half_width: f64) -> Result<Grid, String> {
        if n < 2 {
            return Err("n must be >= 2".into());
        }
        if !(half_width.is_finite() && half_width > 0.0) {
            return Err("half_width must be finite and > 0".into());
        }
        Ok(Grid::build(n, half_width))
    }

    /// The fixed 100 x 100 grid over [-5, 5]².
    pub fn standard() -> Grid {
        Grid::build(GRID_SIZE, DOMAIN_HALF_WIDTH)
    }

    fn build(n: usize, half_width: f64) -> Grid {
        let axis = linspace(-half_width, half_width, n);
        Grid {
            n,
            half_width,
            dx: 2.0 * half_width / ((n - 1) as f64),
            ys: axis.clone(),
            xs: axis,
        }
    }

    // ---- Accessors ----
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}

/// Evenly spaced, endpoints included; the last value is exactly `stop`.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / ((n - 1) as f64);
    (0..n)
        .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
        .collect()
}
