// File: crates/graph-core/src/scale.rs
// Summary: Band (categorical X) and value (Y) scale transforms.

/// Horizontal categorical scale: `count` equal bands across `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count: count.max(1) }
    }

    #[inline]
    pub fn bandwidth(&self) -> f32 {
        (self.right_px - self.left_px) / self.count as f32
    }

    /// Pixel X at the middle of band `i`.
    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.left_px + (i as f32 + 0.5) * self.bandwidth()
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_centers_are_evenly_spaced() {
        let b = BandScale::new(100.0, 500.0, 4);
        assert_eq!(b.bandwidth(), 100.0);
        assert_eq!(b.center(0), 150.0);
        assert_eq!(b.center(3), 450.0);
    }

    #[test]
    fn value_scale_maps_range_onto_pixels() {
        let s = ValueScale::new_linear(10.0, 210.0, 0.0, 400.0);
        assert_eq!(s.to_px(0.0), 210.0);
        assert_eq!(s.to_px(400.0), 10.0);
        assert_eq!(s.to_px(200.0), 110.0);
    }
}
