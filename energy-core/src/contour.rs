//! Filled-contour banding of a [`Field`] and CPU rasterization to RGBA.

use crate::colormap::band_color;
use crate::field::Field;

/// `bands + 1` evenly spaced boundaries over a value range.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourLevels {
    boundaries: Vec<f64>,
}

impl ContourLevels {
    /// A flat range (`min == max`) is widened by ±0.5 so the single value
    /// lands in the middle band.
    pub fn new(min: f64, max: f64, bands: usize) -> ContourLevels {
        let bands = bands.max(1);
        let (lo, hi) = if max > min { (min, max) } else { (min - 0.5, min + 0.5) };
        let step = (hi - lo) / bands as f64;
        let boundaries = (0..=bands)
            .map(|i| if i == bands { hi } else { lo + step * i as f64 })
            .collect();
        ContourLevels { boundaries }
    }

    pub fn for_field(field: &Field, bands: usize) -> ContourLevels {
        ContourLevels::new(field.min(), field.max(), bands)
    }

    pub fn bands(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn lo(&self) -> f64 {
        self.boundaries[0]
    }

    pub fn hi(&self) -> f64 {
        self.boundaries[self.bands()]
    }

    /// Band index in `0..bands`; values outside the range go to the end bands.
    pub fn band_of(&self, value: f64) -> usize {
        let bands = self.bands();
        let span = self.hi() - self.lo();
        let t = (value - self.lo()) / span;
        if t.is_nan() || t <= 0.0 {
            return 0;
        }
        ((t * bands as f64).floor() as usize).min(bands - 1)
    }

    pub fn color_of(&self, value: f64) -> [u8; 3] {
        band_color(self.band_of(value), self.bands())
    }
}

/// RGBA pixels of the banded field, `width * height` long, row 0 at the top
/// (`y = +half_width`). Each pixel samples the field at its centre.
pub fn rasterize(field: &Field, levels: &ContourLevels, width: usize, height: usize) -> Vec<[u8; 4]> {
    let hw = field.half_width();
    let span = 2.0 * hw;
    let mut out = Vec::with_capacity(width * height);

    for py in 0..height {
        let y = hw - (py as f64 + 0.5) / height as f64 * span;
        for px in 0..width {
            let x = -hw + (px as f64 + 0.5) / width as f64 * span;
            let [r, g, b] = levels.color_of(field.sample(x, y));
            out.push([r, g, b, 255]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::viridis;
    use crate::{CONTOUR_LEVELS, Grid, Parameters};

    #[test]
    fn test_fifty_bands_fifty_one_boundaries() {
        let l = ContourLevels::new(-10.0, 40.0, CONTOUR_LEVELS);
        assert_eq!(l.bands(), 50);
        assert_eq!(l.boundaries().len(), 51);
        assert_eq!(l.lo(), -10.0);
        assert_eq!(l.hi(), 40.0);
        assert!((l.boundaries()[1] - -9.0).abs() < 1e-12);
    }

    #[test]
    fn test_band_of_edges() {
        let l = ContourLevels::new(0.0, 50.0, 50);
        assert_eq!(l.band_of(0.0), 0);
        assert_eq!(l.band_of(0.99), 0);
        assert_eq!(l.band_of(1.5), 1);
        assert_eq!(l.band_of(49.5), 49);
        assert_eq!(l.band_of(50.0), 49);
        assert_eq!(l.band_of(-3.0), 0);
        assert_eq!(l.band_of(80.0), 49);
        assert_eq!(l.band_of(f64::NAN), 0);
    }

    #[test]
    fn test_flat_range_uses_middle_band() {
        let l = ContourLevels::new(3.0, 3.0, 50);
        assert_eq!(l.lo(), 2.5);
        assert_eq!(l.hi(), 3.5);
        assert_eq!(l.band_of(3.0), 25);
    }

    #[test]
    fn test_raster_orientation() {
        // k = 0, positive m·g: energy grows with y, so the top row is the
        // brightest band and the bottom row the darkest
        let g = Grid::standard();
        let f = Field::compute(&g, Parameters::new(1.0, 9.81, 0.0));
        let l = ContourLevels::for_field(&f, CONTOUR_LEVELS);
        let (w, h) = (40, 30);
        let px = rasterize(&f, &l, w, h);
        assert_eq!(px.len(), w * h);

        let top = px[0];
        let bottom = px[(h - 1) * w];
        let [tr, tg, tb] = viridis(1.0);
        let [br, bg, bb] = viridis(0.0);
        assert_eq!(top, [tr, tg, tb, 255]);
        assert_eq!(bottom, [br, bg, bb, 255]);
        // constant along each row
        assert!(px[..w].iter().all(|p| *p == top));
    }

    #[test]
    fn test_raster_is_opaque() {
        let g = Grid::standard();
        let f = Field::compute(&g, Parameters::new(1.0, 9.81, 1.0));
        let l = ContourLevels::for_field(&f, CONTOUR_LEVELS);
        assert!(rasterize(&f, &l, 16, 16).iter().all(|p| p[3] == 255));
    }
}
