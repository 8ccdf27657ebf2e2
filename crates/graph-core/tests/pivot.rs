// File: crates/graph-core/tests/pivot.rs
// Purpose: Group-by/pivot shape, zero fill, ordering and permutation invariance.

use chrono::{NaiveDate, NaiveTime};
use graph_core::{AxisKey, AxisKind, PivotTable};

fn date(s: &str) -> AxisKey {
    AxisKey::Date(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap().and_time(NaiveTime::MIN))
}

const EXAMPLE: &str = "billing_period,category,value
2023-01-01,A,100
2023-01-01,B,50
2023-02-01,A,200";

#[test]
fn billing_example_pivots_with_zero_fill() {
    let p = PivotTable::from_csv(EXAMPLE).unwrap();
    assert_eq!(p.dates(), &[date("2023-01-01"), date("2023-02-01")]);
    assert_eq!(p.categories(), &["A".to_string(), "B".to_string()]);
    assert_eq!(p.row(0), &[100.0, 50.0]);
    assert_eq!(p.row(1), &[200.0, 0.0]);
    assert_eq!(p.value(&date("2023-02-01"), "B"), 0.0);
    assert_eq!(p.column(0), vec![100.0, 200.0]);
    assert_eq!(p.date_label(), "billing_period");
    assert_eq!(p.value_label(), "value");
}

#[test]
fn shape_is_dates_by_categories() {
    let csv = "d,c,v
2023-03-01,X,1
2023-01-01,Y,2
2023-02-01,Z,3
2023-01-01,X,4
2023-03-01,W,5";
    let p = PivotTable::from_csv(csv).unwrap();
    assert_eq!(p.row_count(), 3);
    assert_eq!(p.column_count(), 4);
    for r in 0..p.row_count() {
        assert_eq!(p.row(r).len(), 4);
    }
    // 5 non-zero cells, the rest zero-filled
    let nonzero = (0..3).flat_map(|r| p.row(r).to_vec()).filter(|v| *v != 0.0).count();
    assert_eq!(nonzero, 5);
}

#[test]
fn sums_duplicates_and_ignores_missing_values() {
    let csv = "d,c,v
2023-01-01,A,10
2023-01-01,A,15.5
2023-01-01,B,
2023-01-01,A,-5";
    let p = PivotTable::from_csv(csv).unwrap();
    assert_eq!(p.row(0), &[20.5, 0.0]);
}

#[test]
fn dates_ascend_and_categories_follow_first_appearance() {
    let csv = "d,c,v
2023-05-01,Zeta,1
2023-01-01,Alpha,1
2023-03-01,Mid,1";
    let p = PivotTable::from_csv(csv).unwrap();
    assert_eq!(p.dates(), &[date("2023-01-01"), date("2023-03-01"), date("2023-05-01")]);
    assert_eq!(p.categories(), &["Zeta".to_string(), "Alpha".to_string(), "Mid".to_string()]);
}

#[test]
fn sums_are_invariant_under_row_permutation() {
    let rows = [
        "2023-01-01,A,100",
        "2023-01-01,B,50",
        "2023-02-01,A,200",
        "2023-02-01,A,25",
        "2023-03-01,C,7",
        "2023-01-01,C,3",
    ];
    let base = PivotTable::from_csv(&format!("d,c,v\n{}", rows.join("\n"))).unwrap();

    let mut shuffled = rows.to_vec();
    shuffled.reverse();
    shuffled.rotate_left(2);
    let other = PivotTable::from_csv(&format!("d,c,v\n{}", shuffled.join("\n"))).unwrap();

    assert_eq!(base.dates(), other.dates());
    for key in base.dates() {
        for cat in base.categories() {
            assert_eq!(base.value(key, cat), other.value(key, cat), "{key} / {cat}");
        }
    }
}

#[test]
fn tick_labels_are_month_names_for_dates() {
    let p = PivotTable::from_csv(EXAMPLE).unwrap();
    assert_eq!(p.axis_kind(), AxisKind::Date);
    assert_eq!(p.x_tick_labels(), vec!["January".to_string(), "February".to_string()]);
}

#[test]
fn tick_labels_are_raw_keys_for_text() {
    let p = PivotTable::from_csv("period,c,v\nQ2,A,1\nQ1,A,2\n").unwrap();
    assert_eq!(p.axis_kind(), AxisKind::Text);
    assert_eq!(p.x_tick_labels(), vec!["Q1".to_string(), "Q2".to_string()]);
}

#[test]
fn stack_extents() {
    let p = PivotTable::from_csv("d,c,v\n2023-01-01,A,100\n2023-01-01,B,-30\n2023-02-01,A,40\n2023-02-01,B,80\n").unwrap();
    assert_eq!(p.max_stack(), 120.0);
    assert_eq!(p.min_stack(), -30.0);
    assert_eq!(p.value_range(), (-30.0, 100.0));
}
