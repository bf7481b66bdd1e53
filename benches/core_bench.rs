use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use nurbs_path_engine::{effective_degree, synthesize_knot_vector, CurveEvaluator};
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 10.0;
            let y = ((i * 7) % 13) as f64 * 4.0 - 20.0;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_knot_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("knot_synthesis");

    for &point_count in &[8usize, 64, 512] {
        let degree = effective_degree(point_count, 4);
        group.bench_with_input(
            BenchmarkId::new("degree_4", point_count),
            &point_count,
            |b, &count| {
                b.iter(|| {
                    let knots = synthesize_knot_vector(black_box(degree), black_box(count))
                        .expect("Synthese fehlgeschlagen");
                    black_box(knots.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_rebuild");

    for &steps in &[100usize, 1_000, 10_000] {
        let points = build_control_points(24);
        group.bench_with_input(BenchmarkId::new("steps", steps), &steps, |b, &steps| {
            let mut evaluator =
                CurveEvaluator::with_parameters(4, steps).expect("gültige Parameter");
            evaluator
                .set_control_points(points.clone())
                .expect("gültige Kontrollpunkte");
            let mut toggle = false;
            b.iter(|| {
                // Hintergrund-Anker wechseln erzwingt einen Rebuild pro Iteration
                toggle = !toggle;
                evaluator.set_background_anchor(DVec2::new(f64::from(u8::from(toggle)), 0.0));
                black_box(evaluator.positions().len())
            })
        });
    }

    group.finish();
}

fn bench_cached_read(c: &mut Criterion) {
    let mut evaluator = CurveEvaluator::with_parameters(4, 1_000).expect("gültige Parameter");
    evaluator
        .set_control_points(build_control_points(24))
        .expect("gültige Kontrollpunkte");
    evaluator.rebuild();

    c.bench_function("cached_tangent_angles", |b| {
        b.iter(|| black_box(evaluator.tangent_angles().len()))
    });
}

criterion_group!(benches, bench_knot_synthesis, bench_rebuild, bench_cached_read);
criterion_main!(benches);
