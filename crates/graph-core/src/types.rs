// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (canvas size, font sizes, paddings).

/// Default surface width in pixels (12in at 100 dpi).
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels (8in at 100 dpi).
pub const HEIGHT: i32 = 800;
/// Pixels per inch used to convert point sizes.
pub const DPI: f32 = 100.0;

pub const TITLE_PT: f32 = 14.0;
pub const LABEL_PT: f32 = 11.0;
pub const TICK_PT: f32 = 10.0;
pub const LEGEND_PT: f32 = 10.0;
pub const ANNOTATION_PT: f32 = 8.0;

/// Vertical offset of line/area annotations above their point, in points.
pub const ANNOTATION_OFFSET_PT: f32 = 5.0;

/// Convert typographic points to pixels.
#[inline]
pub fn pt(points: f32) -> f32 {
    points * DPI / 72.0
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72.0, 24.0, 24.0, 56.0)
    }
}
