// File: crates/graph-core/tests/smoke.rs
// Purpose: End-to-end renders of every graph type to PNG and RGBA.

use graph_core::{Background, Chart, ColorScheme, GraphType, PivotTable, RenderOptions};

const CSV: &str = "billing_period,category,value
2023-01-01,Compute,1200
2023-01-01,Storage,300
2023-02-01,Compute,1500
2023-02-01,Network,90
2023-03-01,Storage,410
2023-03-01,Compute,1320";

fn chart(graph: GraphType) -> Chart {
    Chart::new(PivotTable::from_csv(CSV).unwrap(), graph, ColorScheme::Plasma).with_title("Cloud spend")
}

#[test]
fn renders_every_graph_type_to_png() {
    for graph in GraphType::ALL {
        let bytes = chart(graph).render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{graph:?} should be PNG");

        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!((img.width(), img.height()), (1200, 800));
    }
}

#[test]
fn render_to_png_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/report.png");
    chart(GraphType::Area).render_to_png(&RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn background_fills_the_figure() {
    let mut opts = RenderOptions::with_background(Background::Pro);
    opts.draw_labels = false;
    let (px, w, h, stride) = chart(GraphType::Line).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);
    assert_eq!(&px[0..4], &[0xe7, 0xe7, 0xe6, 255]);
}

#[test]
fn single_category_bar_uses_first_palette_color() {
    let pivot = PivotTable::from_csv("d,c,v\n2023-01-01,A,100\n").unwrap();
    let chart = Chart::new(pivot, GraphType::StackedBar, ColorScheme::Viridis);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // Default insets leave a plot of x 72..1176, y 24..744; the lone bar is centered
    let (x, y) = (624usize, 400usize);
    let i = y * stride + x * 4;
    assert_eq!(&px[i..i + 4], &[0x44, 0x01, 0x54, 255]);
}

#[test]
fn empty_pivot_is_an_error() {
    let pivot = PivotTable::aggregate(&graph_core::Table {
        headers: vec!["d".into(), "c".into(), "v".into()],
        roles: graph_core::ColumnRoles::positional(3).unwrap(),
        axis_kind: graph_core::AxisKind::Text,
        rows: Vec::new(),
    });
    let chart = Chart::new(pivot, GraphType::Line, ColorScheme::Inferno);
    assert!(chart.render_to_png_bytes(&RenderOptions::default()).is_err());
}
