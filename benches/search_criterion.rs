use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use drop_four::board::position::Position;
use drop_four::search::board_scoring::CellWeightScorer;
use drop_four::search::negamax::search;

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let cases: &[(&str, &[usize])] = &[
        ("empty_board", &[]),
        ("midgame", &[3, 3, 2, 4, 4, 2, 5]),
    ];

    for (name, columns) in cases {
        let base = Position::from_columns(columns).expect("bench columns are legal");

        for depth in [4u8, 6, 8] {
            let bench_name = format!("{name}_d{depth}");
            let bench_position = base.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let mut position = bench_position.clone();
                        let outcome =
                            search(black_box(&mut position), &CellWeightScorer, depth);
                        black_box(outcome.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
