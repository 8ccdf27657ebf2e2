// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; CSV pivoting, chart rendering and export.

pub mod axis;
pub mod chart;
pub mod error;
pub mod export;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod palette;
pub mod pivot;
pub mod scale;
pub mod series;
pub mod table;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, CategoryAxis};
pub use chart::{Chart, RenderOptions, LEGEND_TITLE};
pub use error::{ChartError, ClipboardError};
pub use export::{default_clipboard, png_filename, ClipboardWriter, ExportReport, Exporter, CLIPBOARD_TEMP_FILE};
pub use format::currency;
pub use palette::ColorScheme;
pub use pivot::PivotTable;
pub use series::GraphType;
pub use table::{AxisKey, AxisKind, ColumnRoles, Table};
pub use text::TextShaper;
pub use theme::{Background, Theme};
