// File: crates/graph-core/src/format.rs
// Summary: Currency formatting for tick labels and value annotations.

/// `$` + value rounded to whole units with `,` thousands separators.
/// Negative values keep the sign after the symbol (`$-1,234`).
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative { format!("$-{grouped}") } else { format!("${grouped}") }
}
