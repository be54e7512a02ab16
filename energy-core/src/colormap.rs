// matplotlib viridis, sampled every 1/8
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 45, 123],
    [59, 82, 139],
    [44, 114, 142],
    [33, 145, 140],
    [40, 174, 128],
    [94, 201, 98],
    [173, 220, 48],
    [253, 231, 37],
];

/// Perceptually uniform sequential colour for `t` in [0, 1] (clamped).
pub fn viridis(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (VIRIDIS.len() - 1) as f64;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = pos - i as f64;

    let a = VIRIDIS[i];
    let b = VIRIDIS[i + 1];
    let mut out = [0u8; 3];
    for c in 0..3 {
        let v = a[c] as f64 + (b[c] as f64 - a[c] as f64) * frac;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Fill colour of band `band` out of `bands`, spread over the full map.
pub fn band_color(band: usize, bands: usize) -> [u8; 3] {
    if bands <= 1 {
        return viridis(0.5);
    }
    viridis(band as f64 / (bands - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(viridis(0.0), [68, 1, 84]);
        assert_eq!(viridis(1.0), [253, 231, 37]);
        assert_eq!(viridis(0.5), [33, 145, 140]);
        assert_eq!(viridis(0.875), [173, 220, 48]);
        assert_eq!(viridis(0.25), [59, 82, 139]);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.0), viridis(1.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));
    }

    #[test]
    fn test_green_channel_rises_monotonically() {
        let mut last = 0u8;
        for i in 0..=100 {
            let g = viridis(i as f64 / 100.0)[1];
            assert!(g >= last, "green dropped at step {i}");
            last = g;
        }
    }

    #[test]
    fn test_band_colors_span_map() {
        assert_eq!(band_color(0, 50), viridis(0.0));
        assert_eq!(band_color(49, 50), viridis(1.0));
        assert_eq!(band_color(0, 1), viridis(0.5));
    }
}
