// File: crates/graph-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (stacked bar / line / area) on Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, CategoryAxis};
use crate::format::currency;
use crate::geometry::RectF;
use crate::layout::{self, LegendSize, GAP, PAD, SWATCH, TICK_LEN, X_TICK_ROTATION};
use crate::palette::ColorScheme;
use crate::pivot::PivotTable;
use crate::scale::{BandScale, ValueScale};
use crate::series::{annotations, stack_areas, stack_segments, Anchor, GraphType};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::{Background, Theme};
use crate::types::{pt, Insets, ANNOTATION_OFFSET_PT, ANNOTATION_PT, HEIGHT, LABEL_PT, LEGEND_PT, TICK_PT, TITLE_PT, WIDTH};

pub const LEGEND_TITLE: &str = "Product Family";

/// Fraction of each band covered by a bar.
const BAR_WIDTH: f32 = 0.5;
const AREA_ALPHA: f32 = 0.7;
const Y_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Used instead of the measured tight layout when `draw_labels` is off.
    pub insets: Insets,
    pub background: skia::Color,
    /// Draw text (ticks, labels, annotations, legend, title). Off for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: Background::Default.color(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_background(background: Background) -> Self {
        Self { background: background.color(), ..Self::default() }
    }
}

pub struct Chart {
    pub pivot: PivotTable,
    pub graph_type: GraphType,
    pub scheme: ColorScheme,
    pub title: String,
}

impl Chart {
    pub fn new(pivot: PivotTable, graph_type: GraphType, scheme: ColorScheme) -> Self {
        Self { pivot, graph_type, scheme, title: String::new() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// One color per category, sampled evenly across the scheme.
    pub fn series_colors(&self) -> Vec<skia::Color> {
        self.scheme.colors(self.pivot.column_count())
    }

    /// Y axis fitted to what the graph type actually draws.
    pub fn value_axis(&self) -> Axis {
        let label = self.pivot.value_label().to_string();
        match self.graph_type {
            GraphType::StackedBar => Axis::fitted(label, self.pivot.min_stack(), self.pivot.max_stack(), Y_MARGIN),
            GraphType::Line => {
                let (lo, hi) = self.pivot.value_range();
                Axis::fitted(label, lo, hi, Y_MARGIN)
            }
            GraphType::Area => {
                let (lo, hi) = stack_areas(&self.pivot)
                    .iter()
                    .flatten()
                    .fold((0.0f64, 0.0f64), |(lo, hi), &(a, b)| (lo.min(a).min(b), hi.max(a).max(b)));
                Axis::fitted(label, lo, hi, Y_MARGIN)
            }
        }
    }

    pub fn category_axis(&self) -> CategoryAxis {
        CategoryAxis::new(self.pivot.date_label(), self.pivot.x_tick_labels())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render and encode to PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an unpremultiplied RGBA8 buffer. Returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((px, opts.width, opts.height, stride))
    }

    fn draw(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if self.pivot.is_empty() || self.pivot.column_count() == 0 {
            anyhow::bail!("nothing to plot");
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = Theme::light(opts.background);
        let shaper = TextShaper::new();

        // Figure and axes share the background
        canvas.clear(theme.background);

        let x_axis = self.category_axis();
        let y_axis = self.value_axis();
        let legend = layout::legend_size(&shaper, LEGEND_TITLE, self.pivot.categories());
        let insets = if opts.draw_labels {
            layout::tight_insets(&shaper, &self.title, &x_axis, &y_axis, legend)
        } else {
            opts.insets
        };
        let plot = RectF::inset(opts.width, opts.height, &insets);

        let mut fill = skia::Paint::default();
        fill.set_color(theme.background);
        canvas.draw_rect(plot.to_skia(), &fill);

        let xs = BandScale::new(plot.left, plot.right, self.pivot.row_count());
        let ys = ValueScale::new_linear(plot.top, plot.bottom, y_axis.min, y_axis.max);
        let colors = self.series_colors();

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        match self.graph_type {
            GraphType::StackedBar => draw_stacked_bars(canvas, &self.pivot, &xs, &ys, &colors),
            GraphType::Line => draw_lines(canvas, &self.pivot, &xs, &ys, &colors),
            GraphType::Area => draw_areas(canvas, &self.pivot, &xs, &ys, &colors),
        }
        canvas.restore();

        draw_frame(canvas, &plot, &theme);
        draw_ticks(canvas, &plot, &xs, &ys, &x_axis, &y_axis, &theme);

        if opts.draw_labels {
            draw_tick_labels(canvas, &shaper, &plot, &xs, &ys, &x_axis, &y_axis, &theme);
            draw_annotations(canvas, &shaper, &self.pivot, self.graph_type, &xs, &ys, &theme);
            draw_axis_labels(canvas, &shaper, opts, &plot, &x_axis, &y_axis, &theme);
            if !self.title.is_empty() {
                shaper.draw(
                    canvas,
                    &self.title,
                    (plot.center_x(), PAD),
                    pt(TITLE_PT),
                    theme.axis_label,
                    HAlign::Center,
                    VAlign::Top,
                );
            }
            draw_legend(canvas, &shaper, &plot, legend, self.pivot.categories(), &colors, self.graph_type, &theme);
        }

        tracing::debug!(graph = self.graph_type.label(), width = opts.width, height = opts.height, "rendered chart");
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn draw_stacked_bars(canvas: &skia::Canvas, pivot: &PivotTable, xs: &BandScale, ys: &ValueScale, colors: &[skia::Color]) {
    let half = xs.bandwidth() * BAR_WIDTH * 0.5;
    for seg in stack_segments(pivot) {
        let x = xs.center(seg.row);
        let (a, b) = (ys.to_px(seg.base), ys.to_px(seg.top()));
        let rect = skia::Rect::from_ltrb(x - half, a.min(b), x + half, a.max(b));
        canvas.draw_rect(rect, &fill_paint(colors[seg.col]));
    }
}

fn draw_lines(canvas: &skia::Canvas, pivot: &PivotTable, xs: &BandScale, ys: &ValueScale, colors: &[skia::Color]) {
    let radius = pt(3.0);
    for (col, &color) in colors.iter().enumerate() {
        let points = pivot
            .column(col)
            .into_iter()
            .enumerate()
            .map(|(row, v)| (xs.center(row), ys.to_px(v)))
            .collect::<Vec<_>>();

        if points.len() >= 2 {
            let mut path = skia::Path::new();
            path.move_to(points[0]);
            for &p in points.iter().skip(1) {
                path.line_to(p);
            }
            canvas.draw_path(&path, &stroke_paint(color, 2.0));
        }

        let marker = fill_paint(color);
        for &p in &points {
            canvas.draw_circle(p, radius, &marker);
        }
    }
}

fn draw_areas(canvas: &skia::Canvas, pivot: &PivotTable, xs: &BandScale, ys: &ValueScale, colors: &[skia::Color]) {
    for (band, &color) in stack_areas(pivot).iter().zip(colors) {
        let mut path = skia::Path::new();
        path.move_to((xs.center(0), ys.to_px(band[0].1)));
        for (row, &(_, upper)) in band.iter().enumerate().skip(1) {
            path.line_to((xs.center(row), ys.to_px(upper)));
        }
        for (row, &(lower, _)) in band.iter().enumerate().rev() {
            path.line_to((xs.center(row), ys.to_px(lower)));
        }
        path.close();

        let mut paint = fill_paint(color);
        paint.set_alpha_f(AREA_ALPHA);
        canvas.draw_path(&path, &paint);

        if band.len() == 1 {
            // A single date has no width; show it as a tick mark
            let x = xs.center(0);
            let (lo, hi) = (ys.to_px(band[0].0), ys.to_px(band[0].1));
            canvas.draw_line((x, lo), (x, hi), &stroke_paint(color, 2.0));
        }
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectF, theme: &Theme) {
    canvas.draw_rect(plot.to_skia(), &stroke_paint(theme.axis_line, 1.0));
}

fn draw_ticks(
    canvas: &skia::Canvas,
    plot: &RectF,
    xs: &BandScale,
    ys: &ValueScale,
    x_axis: &CategoryAxis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let paint = stroke_paint(theme.tick, 1.0);
    for t in y_axis.ticks() {
        let y = ys.to_px(t);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &paint);
    }
    for i in 0..x_axis.ticks.len() {
        let x = xs.center(i);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectF,
    xs: &BandScale,
    ys: &ValueScale,
    x_axis: &CategoryAxis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let size = pt(TICK_PT);
    for t in y_axis.ticks() {
        shaper.draw(
            canvas,
            &currency(t),
            (plot.left - TICK_LEN - GAP, ys.to_px(t)),
            size,
            theme.axis_label,
            HAlign::Right,
            VAlign::Middle,
        );
    }
    for (i, label) in x_axis.ticks.iter().enumerate() {
        let anchor = (xs.center(i), plot.bottom + TICK_LEN + GAP);
        shaper.draw_rotated(canvas, label, anchor, X_TICK_ROTATION, size, theme.axis_label);
    }
}

fn draw_annotations(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    pivot: &PivotTable,
    graph: GraphType,
    xs: &BandScale,
    ys: &ValueScale,
    theme: &Theme,
) {
    let size = pt(ANNOTATION_PT);
    for a in annotations(pivot, graph) {
        let x = xs.center(a.group);
        let y = ys.to_px(a.value);
        match a.anchor {
            Anchor::Center => {
                shaper.draw(canvas, &a.text, (x, y), size, theme.bar_annotation, HAlign::Center, VAlign::Middle)
            }
            Anchor::Above => shaper.draw(
                canvas,
                &a.text,
                (x, y - pt(ANNOTATION_OFFSET_PT)),
                size,
                theme.annotation,
                HAlign::Center,
                VAlign::Baseline,
            ),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot: &RectF,
    x_axis: &CategoryAxis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let size = pt(LABEL_PT);
    let baseline = opts.height as f32 - PAD;
    shaper.draw(canvas, &x_axis.label, (plot.center_x(), baseline), size, theme.axis_label, HAlign::Center, VAlign::Baseline);

    // y label reads bottom-to-top along the left edge
    canvas.save();
    canvas.translate((PAD, (plot.top + plot.bottom) * 0.5));
    canvas.rotate(-90.0, None);
    shaper.draw(canvas, &y_axis.label, (0.0, 0.0), size, theme.axis_label, HAlign::Center, VAlign::Top);
    canvas.restore();
}

#[allow(clippy::too_many_arguments)]
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectF,
    legend: LegendSize,
    entries: &[String],
    colors: &[skia::Color],
    graph: GraphType,
    theme: &Theme,
) {
    let size = pt(LEGEND_PT);
    let left = plot.right + GAP * 2.0;
    let top = plot.top;
    let frame = skia::Rect::from_xywh(left, top, legend.width, legend.height);
    canvas.draw_rect(frame, &fill_paint(theme.background));
    canvas.draw_rect(frame, &stroke_paint(theme.legend_frame, 1.0));

    let x = left + GAP;
    let mut y = top + GAP;
    shaper.draw(canvas, LEGEND_TITLE, (left + legend.width * 0.5, y), size, theme.axis_label, HAlign::Center, VAlign::Top);
    y += legend.row_height;

    for (name, &color) in entries.iter().zip(colors) {
        let mid = y + legend.row_height * 0.5;
        match graph {
            GraphType::Line => {
                canvas.draw_line((x, mid), (x + SWATCH, mid), &stroke_paint(color, 2.0));
                canvas.draw_circle((x + SWATCH * 0.5, mid), pt(3.0), &fill_paint(color));
            }
            GraphType::StackedBar | GraphType::Area => {
                let mut paint = fill_paint(color);
                if graph == GraphType::Area {
                    paint.set_alpha_f(AREA_ALPHA);
                }
                canvas.draw_rect(skia::Rect::from_xywh(x, mid - SWATCH * 0.5, SWATCH, SWATCH), &paint);
            }
        }
        shaper.draw(canvas, name, (x + SWATCH + GAP, mid), size, theme.axis_label, HAlign::Left, VAlign::Middle);
        y += legend.row_height;
    }
}
