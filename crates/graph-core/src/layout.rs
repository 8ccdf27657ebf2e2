// File: crates/graph-core/src/layout.rs
// Summary: Tight layout: size the insets from measured labels, ticks, title and legend.

use crate::axis::{Axis, CategoryAxis};
use crate::format::currency;
use crate::text::TextShaper;
use crate::types::{pt, Insets, LABEL_PT, LEGEND_PT, TICK_PT, TITLE_PT};

pub const PAD: f32 = 12.0;
pub const GAP: f32 = 6.0;
pub const TICK_LEN: f32 = 5.0;
pub const X_TICK_ROTATION: f32 = 45.0;
pub const SWATCH: f32 = 14.0;

/// Measured legend box (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendSize {
    pub width: f32,
    pub height: f32,
    pub row_height: f32,
}

pub fn legend_size(shaper: &TextShaper, title: &str, entries: &[String]) -> LegendSize {
    let size = pt(LEGEND_PT);
    let row_height = shaper.line_height(size).max(SWATCH) + 2.0;
    let widest_entry = entries
        .iter()
        .map(|e| SWATCH + GAP + shaper.measure_width(e, size))
        .fold(0.0f32, f32::max);
    let width = widest_entry.max(shaper.measure_width(title, size)) + 2.0 * GAP;
    let height = row_height * (entries.len() + 1) as f32 + 2.0 * GAP;
    LegendSize { width, height, row_height }
}

/// Insets that keep every label on canvas: y ticks and label on the left,
/// rotated x ticks and label below, title above, legend to the right.
pub fn tight_insets(
    shaper: &TextShaper,
    title: &str,
    x_axis: &CategoryAxis,
    y_axis: &Axis,
    legend: LegendSize,
) -> Insets {
    let tick_px = pt(TICK_PT);
    let label_px = pt(LABEL_PT);

    let y_tick_w = y_axis
        .ticks()
        .into_iter()
        .map(|t| shaper.measure_width(&currency(t), tick_px))
        .fold(0.0f32, f32::max);
    let left = PAD + shaper.line_height(label_px) + GAP + y_tick_w + GAP + TICK_LEN;

    let x_tick_h = x_axis
        .ticks
        .iter()
        .map(|t| shaper.rotated_extent(t, X_TICK_ROTATION, tick_px).1)
        .fold(0.0f32, f32::max);
    let bottom = TICK_LEN + GAP + x_tick_h + GAP + shaper.line_height(label_px) + PAD;

    let top = if title.is_empty() { PAD * 2.0 } else { PAD + shaper.line_height(pt(TITLE_PT)) + GAP * 2.0 };
    let right = GAP * 2.0 + legend.width + PAD;

    let insets = Insets::new(left, right, top, bottom);
    tracing::debug!(?insets, "tight layout");
    insets
}
