// File: crates/graph-core/src/series.rs
// Summary: Graph variants plus their value-space geometry (stacked segments, annotations).
// Notes:
// - Everything here is in data coordinates (group index, value) so placement
//   rules can be checked without a raster surface; `chart.rs` maps to pixels.

use crate::error::ChartError;
use crate::format::currency;
use crate::pivot::PivotTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphType {
    StackedBar,
    Line,
    Area,
}

impl GraphType {
    pub const ALL: [GraphType; 3] = [GraphType::StackedBar, GraphType::Line, GraphType::Area];

    pub fn label(self) -> &'static str {
        match self {
            GraphType::StackedBar => "Stacked Bar Graph",
            GraphType::Line => "Line Graph",
            GraphType::Area => "Area Graph",
        }
    }

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: usize) -> Result<Self, ChartError> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| ChartError::InvalidSelection { menu: "graph type", input: choice.to_string() })
    }
}

/// One stacked rectangle: category `col` at group `row`, spanning `[base, base + value]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub row: usize,
    pub col: usize,
    pub base: f64,
    pub value: f64,
}

impl Segment {
    pub fn top(&self) -> f64 { self.base + self.value }
    pub fn mid(&self) -> f64 { self.base + self.value * 0.5 }
}

/// Stack each group's categories in column order. Positive values grow up from
/// zero, negative values grow down from zero, each with its own running base.
pub fn stack_segments(pivot: &PivotTable) -> Vec<Segment> {
    let mut out = Vec::with_capacity(pivot.row_count() * pivot.column_count());
    for row in 0..pivot.row_count() {
        let (mut up, mut down) = (0.0f64, 0.0f64);
        for (col, &value) in pivot.row(row).iter().enumerate() {
            let base = if value < 0.0 { &mut down } else { &mut up };
            out.push(Segment { row, col, base: *base, value });
            *base += value;
        }
    }
    out
}

/// Running per-date totals used as the upper edge of each area band.
/// `bands[col][row]` is `(lower, upper)`.
pub fn stack_areas(pivot: &PivotTable) -> Vec<Vec<(f64, f64)>> {
    let mut running = vec![0.0f64; pivot.row_count()];
    (0..pivot.column_count())
        .map(|col| {
            (0..pivot.row_count())
                .map(|row| {
                    let lower = running[row];
                    running[row] += pivot.get(row, col);
                    (lower, running[row])
                })
                .collect()
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Centered on the point (stacked bar segment midpoints).
    Center,
    /// Centered horizontally, baseline a fixed offset above the point.
    Above,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub group: usize,
    pub value: f64,
    pub text: String,
    pub anchor: Anchor,
}

/// Value labels for the chosen graph type.
///
/// Stacked bars label every segment with its own value at the segment's
/// midpoint. Line and area label only the last category at each date, at
/// that category's raw value.
pub fn annotations(pivot: &PivotTable, graph: GraphType) -> Vec<Annotation> {
    match graph {
        GraphType::StackedBar => stack_segments(pivot)
            .into_iter()
            .map(|s| Annotation { group: s.row, value: s.mid(), text: currency(s.value), anchor: Anchor::Center })
            .collect(),
        GraphType::Line | GraphType::Area => {
            let Some(last) = pivot.column_count().checked_sub(1) else {
                return Vec::new();
            };
            (0..pivot.row_count())
                .map(|row| {
                    let v = pivot.get(row, last);
                    Annotation { group: row, value: v, text: currency(v), anchor: Anchor::Above }
                })
                .collect()
        }
    }
}
