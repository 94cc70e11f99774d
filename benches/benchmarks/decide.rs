use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use elastic_orchestrator::decision::PredictivePolicy;
use elastic_orchestrator::{decide, PolicyKind, ScalingPolicy, Trace};
use strum::IntoEnumIterator;

fn make_trace(nr_points: u64) -> Trace {
    Trace::from_records((0..nr_points).map(|i| (i as f64 * 0.5, (i * 7) % 53))).expect("valid trace")
}

fn predictive_lookup_benchmark(c: &mut Criterion) {
    let policy = ScalingPolicy::Predictive(PredictivePolicy::default());
    let mut group = c.benchmark_group("predictive_lookup");

    for nr_points in [1_000_u64, 100_000, 1_000_000] {
        let trace = make_trace(nr_points);
        let timestamp = (nr_points / 2) as f64 * 0.5;
        group.bench_with_input(BenchmarkId::from_parameter(nr_points), &trace, |b, trace| {
            b.iter(|| decide(black_box(20), 4, 10, black_box(timestamp), &policy, Some(trace)))
        });
    }

    group.finish();
}

fn policy_benchmark(c: &mut Criterion) {
    let trace = make_trace(1_000);
    let mut group = c.benchmark_group("policy");

    for kind in PolicyKind::iter() {
        let policy = ScalingPolicy::from(kind);
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| decide(black_box(27), black_box(4), 10, 2.0, &policy, Some(&trace)))
        });
    }

    group.finish();
}

criterion_group!(benches, predictive_lookup_benchmark, policy_benchmark);
