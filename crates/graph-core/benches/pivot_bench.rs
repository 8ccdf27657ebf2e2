use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_core::{PivotTable, Table};

fn gen_csv(rows: usize) -> String {
    let mut csv = String::with_capacity(rows * 32);
    csv.push_str("billing_period,category,value\n");
    for i in 0..rows {
        // 36 months x 12 families, repeated
        let (year, month) = (2020 + (i / 12) % 3, i % 12 + 1);
        csv.push_str(&format!("{year}-{month:02}-01,family_{},{}\n", i % 12, (i % 1000) as f64 * 0.5));
    }
    csv
}

fn bench_pivot(c: &mut Criterion) {
    let mut group = c.benchmark_group("pivot");
    for &n in &[10_000usize, 100_000usize] {
        let table = Table::parse(&gen_csv(n)).expect("bench table");
        group.bench_with_input(BenchmarkId::from_parameter(format!("aggregate_{n}")), &table, |b, t| {
            b.iter(|| black_box(PivotTable::aggregate(t)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pivot);
criterion_main!(benches);
