// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area left over after carving `insets` out of a `width`×`height` canvas.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let right = (width as f32 - insets.right).max(insets.left + 1.0);
        let bottom = (height as f32 - insets.bottom).max(insets.top + 1.0);
        Self::from_ltrb(insets.left, insets.top, right, bottom)
    }

    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }

    pub fn to_skia(self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
