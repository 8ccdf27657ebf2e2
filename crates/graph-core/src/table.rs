// File: crates/graph-core/src/table.rs
// Summary: CSV text -> typed table with positional date/category/value roles.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::error::ChartError;

/// Which columns play which part. Everything downstream asks this accessor
/// instead of indexing columns directly, so switching to header-name lookup
/// only touches `ColumnRoles`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnRoles {
    pub date: usize,
    pub category: usize,
    pub value: usize,
}

impl ColumnRoles {
    /// First column = date, second = category, last = value.
    pub fn positional(column_count: usize) -> Result<Self, ChartError> {
        if column_count < 3 {
            return Err(ChartError::TooFewColumns { found: column_count });
        }
        Ok(Self { date: 0, category: 1, value: column_count - 1 })
    }
}

/// How the date column was interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Date,
    Text,
}

/// One X-axis group key. A column holds only one variant.
/// Date keys keep their time of day, so two timestamps on the same day are distinct groups.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisKey {
    Date(NaiveDateTime),
    Text(String),
}

impl AxisKey {
    /// Tick label: full month name for dates, the raw key otherwise.
    pub fn tick_label(&self) -> String {
        match self {
            AxisKey::Date(d) => d.format("%B").to_string(),
            AxisKey::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for AxisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKey::Date(d) if d.time() == NaiveTime::MIN => write!(f, "{}", d.format("%Y-%m-%d")),
            AxisKey::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
            AxisKey::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub key: AxisKey,
    pub category: String,
    /// `None` for an empty value cell.
    pub value: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub roles: ColumnRoles,
    pub axis_kind: AxisKind,
    pub rows: Vec<Row>,
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Parse a date-like cell. Plain dates land at midnight; month-only periods
/// (`2023-01`, `Jan 2023`, `January 2023`) land on the first of the month.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for f in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, f) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    for f in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, f) {
            return Some(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    parse_month(s).map(|d| d.and_time(NaiveTime::MIN))
}

/// `YYYY-MM` or a month name followed by the year; `%b` also accepts full names.
fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("1 {s}"), "%d %b %Y"))
        .ok()
}

impl Table {
    pub fn parse(text: &str) -> Result<Self, ChartError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
        let roles = ColumnRoles::positional(headers.len())?;

        let mut raw: Vec<(String, String, Option<f64>)> = Vec::new();
        for (i, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row_no = i + 1;
            let field = |ix: usize| rec.get(ix).unwrap_or("").to_string();
            let (key, category, value) = (field(roles.date), field(roles.category), field(roles.value));

            if key.is_empty() || category.is_empty() {
                tracing::warn!(row = row_no, "skipping row with empty date or category");
                continue;
            }
            let value = if value.is_empty() {
                None
            } else {
                Some(value.parse::<f64>().map_err(|_| ChartError::NotNumeric {
                    row: row_no,
                    column: headers[roles.value].clone(),
                    value: value.clone(),
                })?)
            };
            raw.push((key, category, value));
        }

        if raw.is_empty() {
            return Err(ChartError::NoRows);
        }

        let dates = raw.iter().map(|(k, _, _)| parse_date(k)).collect::<Option<Vec<_>>>();
        let axis_kind = if dates.is_some() { AxisKind::Date } else { AxisKind::Text };
        let rows = match dates {
            Some(dates) => raw
                .into_iter()
                .zip(dates)
                .map(|((_, category, value), d)| Row { key: AxisKey::Date(d), category, value })
                .collect(),
            None => raw
                .into_iter()
                .map(|(k, category, value)| Row { key: AxisKey::Text(k), category, value })
                .collect(),
        };

        tracing::debug!(columns = headers.len(), ?axis_kind, "parsed table");
        Ok(Self { headers, roles, axis_kind, rows })
    }

    pub fn date_header(&self) -> &str { &self.headers[self.roles.date] }
    pub fn category_header(&self) -> &str { &self.headers[self.roles.category] }
    pub fn value_header(&self) -> &str { &self.headers[self.roles.value] }
}
