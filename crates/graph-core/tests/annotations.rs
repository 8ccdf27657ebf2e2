// File: crates/graph-core/tests/annotations.rs
// Purpose: Per-graph-type stacking geometry and value-label placement.

use graph_core::series::{annotations, stack_areas, stack_segments, Anchor, Annotation, Segment};
use graph_core::{GraphType, PivotTable};

fn pivot() -> PivotTable {
    PivotTable::from_csv(
        "billing_period,category,value
2023-01-01,A,100
2023-01-01,B,50
2023-02-01,A,200",
    )
    .unwrap()
}

#[test]
fn bar_segments_stack_in_column_order() {
    let segs = stack_segments(&pivot());
    assert_eq!(
        segs,
        vec![
            Segment { row: 0, col: 0, base: 0.0, value: 100.0 },
            Segment { row: 0, col: 1, base: 100.0, value: 50.0 },
            Segment { row: 1, col: 0, base: 0.0, value: 200.0 },
            Segment { row: 1, col: 1, base: 200.0, value: 0.0 },
        ]
    );
}

#[test]
fn negative_segments_stack_downward() {
    let p = PivotTable::from_csv("d,c,v\n2023-01-01,A,10\n2023-01-01,B,-4\n2023-01-01,C,-6\n2023-01-01,D,5\n").unwrap();
    let segs = stack_segments(&p);
    assert_eq!(segs[1], Segment { row: 0, col: 1, base: 0.0, value: -4.0 });
    assert_eq!(segs[2], Segment { row: 0, col: 2, base: -4.0, value: -6.0 });
    assert_eq!(segs[3], Segment { row: 0, col: 3, base: 10.0, value: 5.0 });
}

#[test]
fn bar_labels_every_segment_at_its_midpoint() {
    let labels = annotations(&pivot(), GraphType::StackedBar);
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0], Annotation { group: 0, value: 50.0, text: "$100".into(), anchor: Anchor::Center });
    assert_eq!(labels[1], Annotation { group: 0, value: 125.0, text: "$50".into(), anchor: Anchor::Center });
    assert_eq!(labels[2].value, 100.0);
    // zero-height segments are still labelled
    assert_eq!(labels[3], Annotation { group: 1, value: 200.0, text: "$0".into(), anchor: Anchor::Center });
}

#[test]
fn line_and_area_label_only_the_last_category() {
    for graph in [GraphType::Line, GraphType::Area] {
        let labels = annotations(&pivot(), graph);
        assert_eq!(
            labels,
            vec![
                Annotation { group: 0, value: 50.0, text: "$50".into(), anchor: Anchor::Above },
                Annotation { group: 1, value: 0.0, text: "$0".into(), anchor: Anchor::Above },
            ],
            "{graph:?}"
        );
    }
}

#[test]
fn area_bands_accumulate_per_date() {
    let bands = stack_areas(&pivot());
    assert_eq!(bands, vec![vec![(0.0, 100.0), (0.0, 200.0)], vec![(100.0, 150.0), (200.0, 200.0)]]);
}

#[test]
fn labels_use_currency_format() {
    let p = PivotTable::from_csv("d,c,v\n2023-01-01,A,1234567.4\n").unwrap();
    let labels = annotations(&p, GraphType::Line);
    assert_eq!(labels[0].text, "$1,234,567");
}
