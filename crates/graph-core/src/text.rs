// File: crates/graph-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; measures, aligns and rotates labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal alignment relative to the anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical alignment relative to the anchor y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Baseline,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Helvetica", "Arial", "Segoe UI", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        // width of the longest line
        p.longest_line()
    }

    /// Line height for `size`, falling back to the nominal size when no font resolved.
    pub fn line_height(&self, size: f32) -> f32 {
        let p = self.layout("Hg", size, skia::Color::TRANSPARENT);
        if p.height() > 0.0 { p.height() } else { size * 1.2 }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        h: HAlign,
        v: VAlign,
    ) {
        let p = self.layout(text, size, color);
        let (dx, dy) = offset(&p, size, h, v);
        p.paint(canvas, (x + dx, y + dy));
    }

    /// Draw `text` rotated by `degrees` (counter-clockwise) with its right/top corner pinned at the anchor,
    /// the way tick labels hang under an axis.
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        degrees: f32,
        size: f32,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color);
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-degrees, None);
        p.paint(canvas, (-p.longest_line(), 0.0));
        canvas.restore();
    }

    /// Extent (width, height) of a label after rotating by `degrees`.
    pub fn rotated_extent(&self, text: &str, degrees: f32, size: f32) -> (f32, f32) {
        let w = self.measure_width(text, size);
        let h = self.line_height(size);
        let (s, c) = degrees.to_radians().sin_cos();
        (w * c.abs() + h * s.abs(), w * s.abs() + h * c.abs())
    }
}

fn offset(p: &Paragraph, size: f32, h: HAlign, v: VAlign) -> (f32, f32) {
    let w = p.longest_line();
    let height = if p.height() > 0.0 { p.height() } else { size * 1.2 };
    let dx = match h {
        HAlign::Left => 0.0,
        HAlign::Center => -w * 0.5,
        HAlign::Right => -w,
    };
    let dy = match v {
        VAlign::Top => 0.0,
        VAlign::Middle => -height * 0.5,
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        VAlign::Baseline => -size * 0.8,
    };
    (dx, dy)
}
