// File: crates/graph-core/src/pivot.rs
// Summary: Group-by (date, category) sum, pivoted into one zero-filled series per category.

use std::collections::{BTreeMap, HashMap};

use crate::error::ChartError;
use crate::table::{AxisKey, AxisKind, Table};

/// Dates (rows, ascending) × categories (columns, first-appearance order).
#[derive(Clone, Debug, PartialEq)]
pub struct PivotTable {
    date_label: String,
    value_label: String,
    axis_kind: AxisKind,
    dates: Vec<AxisKey>,
    categories: Vec<String>,
    /// Row-major, `dates.len() * categories.len()`.
    values: Vec<f64>,
}

impl PivotTable {
    pub fn aggregate(table: &Table) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut col_of: HashMap<&str, usize> = HashMap::new();
        let mut sums: BTreeMap<&AxisKey, HashMap<usize, f64>> = BTreeMap::new();

        for row in &table.rows {
            let col = *col_of.entry(row.category.as_str()).or_insert_with(|| {
                categories.push(row.category.clone());
                categories.len() - 1
            });
            let cell = sums.entry(&row.key).or_default().entry(col).or_insert(0.0);
            if let Some(v) = row.value {
                *cell += v;
            }
        }

        let n = categories.len();
        let mut dates = Vec::with_capacity(sums.len());
        let mut values = vec![0.0; sums.len() * n];
        for (r, (key, cells)) in sums.into_iter().enumerate() {
            dates.push(key.clone());
            for (c, v) in cells {
                values[r * n + c] = v;
            }
        }

        tracing::debug!(dates = dates.len(), categories = n, "pivoted table");
        Self {
            date_label: table.date_header().to_string(),
            value_label: table.value_header().to_string(),
            axis_kind: table.axis_kind,
            dates,
            categories,
            values,
        }
    }

    /// Parse and aggregate in one step.
    pub fn from_csv(text: &str) -> Result<Self, ChartError> {
        Ok(Self::aggregate(&Table::parse(text)?))
    }

    pub fn dates(&self) -> &[AxisKey] { &self.dates }
    pub fn categories(&self) -> &[String] { &self.categories }
    pub fn axis_kind(&self) -> AxisKind { self.axis_kind }
    pub fn date_label(&self) -> &str { &self.date_label }
    pub fn value_label(&self) -> &str { &self.value_label }
    pub fn row_count(&self) -> usize { self.dates.len() }
    pub fn column_count(&self) -> usize { self.categories.len() }
    pub fn is_empty(&self) -> bool { self.dates.is_empty() }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.categories.len() + col]
    }

    /// Sum for a (date, category) pair; 0.0 for unknown categories or dates.
    pub fn value(&self, key: &AxisKey, category: &str) -> f64 {
        let r = self.dates.binary_search(key).ok();
        let c = self.categories.iter().position(|c| c == category);
        match (r, c) {
            (Some(r), Some(c)) => self.get(r, c),
            _ => 0.0,
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let n = self.categories.len();
        &self.values[row * n..(row + 1) * n]
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.dates.len()).map(|r| self.get(r, col)).collect()
    }

    pub fn x_tick_labels(&self) -> Vec<String> {
        self.dates.iter().map(AxisKey::tick_label).collect()
    }

    /// Largest positive stack height over all dates (0.0 if none).
    pub fn max_stack(&self) -> f64 {
        (0..self.row_count())
            .map(|r| self.row(r).iter().filter(|v| **v > 0.0).sum::<f64>())
            .fold(0.0, f64::max)
    }

    /// Deepest negative stack over all dates (0.0 if none).
    pub fn min_stack(&self) -> f64 {
        (0..self.row_count())
            .map(|r| self.row(r).iter().filter(|v| **v < 0.0).sum::<f64>())
            .fold(0.0, f64::min)
    }

    /// (min, max) over individual cells.
    pub fn value_range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    }
}
