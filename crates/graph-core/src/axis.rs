// File: crates/graph-core/src/axis.rs
// Summary: Axis models: a numeric value axis and a categorical (date/group) axis.

use crate::grid::nice_ticks;

/// Target tick count for value axes.
const VALUE_TICKS: usize = 7;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis spanning `[lo, hi]` widened by `margin` (fraction of the span) on each side.
    /// A side sitting exactly on zero stays pinned there, the way bar charts keep their base.
    pub fn fitted(label: impl Into<String>, lo: f64, hi: f64, margin: f64) -> Self {
        let (mut lo, mut hi) = (lo.min(hi), lo.max(hi));
        if (hi - lo).abs() < 1e-9 {
            lo -= 1.0;
            hi += 1.0;
        }
        let pad = (hi - lo) * margin;
        let min = if lo == 0.0 { 0.0 } else { lo - pad };
        let max = if hi == 0.0 { 0.0 } else { hi + pad };
        Self::new(label, min, max)
    }

    pub fn ticks(&self) -> Vec<f64> {
        nice_ticks(self.min, self.max, VALUE_TICKS)
    }
}

/// X axis over discrete groups, one tick label per group.
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    pub label: String,
    pub ticks: Vec<String>,
}

impl CategoryAxis {
    pub fn new(label: impl Into<String>, ticks: Vec<String>) -> Self {
        Self { label: label.into(), ticks }
    }
}
