use energy_core::{CONTOUR_LEVELS, ContourLevels, Field, Grid, ParameterText, compute_field, rasterize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct EnergyField {
    grid: Grid,
    current: Option<(Field, ContourLevels)>,
}

impl Default for EnergyField {
    fn default() -> Self {
        EnergyField::new()
    }
}

#[wasm_bindgen]
impl EnergyField {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EnergyField {
        EnergyField {
            grid: Grid::standard(),
            current: None,
        }
    }

    /// Parse the three inputs and evaluate the field. A rejected input
    /// throws and leaves the previous field in place.
    pub fn compute(&mut self, mass: &str, gravity: &str, spring: &str) -> Result<ComputeInfo, JsValue> {
        let t0 = now_ms();
        let field = compute_field(&self.grid, &ParameterText::new(mass, gravity, spring))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let levels = ContourLevels::for_field(&field, CONTOUR_LEVELS);
        let t1 = now_ms();

        let info = ComputeInfo {
            compute_ms: t1 - t0,
            min: field.min(),
            max: field.max(),
        };
        self.current = Some((field, levels));
        Ok(info)
    }

    pub fn size(&self) -> usize { self.grid.n() }

    // Copy-based JS access
    pub fn get_axis(&self) -> Vec<f64> {
        self.grid.xs().to_vec()
    }

    pub fn get_field(&self) -> Vec<f64> {
        self.current.as_ref().map(|(f, _)| f.values().to_vec()).unwrap_or_default()
    }

    pub fn get_levels(&self) -> Vec<f64> {
        self.current.as_ref().map(|(_, l)| l.boundaries().to_vec()).unwrap_or_default()
    }

    /// RGBA bytes for a canvas `ImageData`, row 0 at the top. Empty before
    /// the first successful `compute`.
    pub fn render_rgba(&self, width: usize, height: usize) -> Vec<u8> {
        match &self.current {
            Some((field, levels)) => rasterize(field, levels, width, height).into_iter().flatten().collect(),
            None => Vec::new(),
        }
    }
}

#[wasm_bindgen]
pub struct ComputeInfo {
    compute_ms: f64,
    min: f64,
    max: f64,
}

#[wasm_bindgen]
impl ComputeInfo {
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

// no JS host outside wasm32 (native unit tests)
#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    0.0
}
