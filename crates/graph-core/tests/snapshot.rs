// File: crates/graph-core/tests/snapshot.rs
// Purpose: Golden snapshots per graph type with bless flow.
// Behavior:
// - Renders a deterministic chart (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use graph_core::{Background, Chart, ColorScheme, GraphType, PivotTable, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(graph: GraphType, scheme: ColorScheme, background: Background) -> Vec<u8> {
    let pivot = PivotTable::from_csv(
        "month,family,revenue
2024-01-01,Hardware,400
2024-01-01,Software,250
2024-01-01,Services,120
2024-02-01,Hardware,380
2024-02-01,Software,300
2024-03-01,Hardware,450
2024-03-01,Services,160
2024-04-01,Software,320",
    )
    .expect("pivot");
    let mut opts = RenderOptions::with_background(background);
    opts.width = 480;
    opts.height = 320;
    opts.draw_labels = false; // deterministic
    Chart::new(pivot, graph, scheme).render_to_png_bytes(&opts).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_stacked_bar() {
    let bytes = render_bytes(GraphType::StackedBar, ColorScheme::Viridis, Background::Default);
    write_or_compare(&snapshot_path("stacked_bar.png"), &bytes);
}

#[test]
fn golden_line() {
    let bytes = render_bytes(GraphType::Line, ColorScheme::Magma, Background::Pro);
    write_or_compare(&snapshot_path("line.png"), &bytes);
}

#[test]
fn golden_area() {
    let bytes = render_bytes(GraphType::Area, ColorScheme::Cividis, Background::Default);
    write_or_compare(&snapshot_path("area.png"), &bytes);
}
