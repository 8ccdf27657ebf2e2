use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graph_core::{Chart, ColorScheme, GraphType, PivotTable};
use graph_core::RenderOptions;

fn build_pivot(dates: usize, categories: usize) -> PivotTable {
    let mut csv = String::from("billing_period,category,value\n");
    for d in 0..dates {
        let (year, month) = (2000 + d / 12, d % 12 + 1);
        for c in 0..categories {
            let v = ((d * 7 + c * 13) % 97) as f64 * 10.0;
            csv.push_str(&format!("{year}-{month:02}-01,family_{c},{v}\n"));
        }
    }
    PivotTable::from_csv(&csv).expect("bench pivot")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for graph in GraphType::ALL {
        group.bench_function(format!("{graph:?}_24x6"), |b| {
            let ch = Chart::new(build_pivot(24, 6), graph, ColorScheme::Viridis).with_title("bench");
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
