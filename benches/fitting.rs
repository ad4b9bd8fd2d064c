use criterion::{criterion_group, criterion_main, Criterion};
use polyreg::{api::FitRequest, score::Aic, CurveFit, Polynomial};
use std::hint::black_box;

/// Samples `1 + 3x + 5.3x²` at `n` evenly spaced points in `[-1, 1]`.
fn gen_sample_data(n: usize) -> Vec<(f64, f64)> {
    let y = Polynomial::borrowed(&[1.0, 3.0, 5.3]);
    let step = 2.0 / (n - 1) as f64;
    y.solve_range(-1.0..=1.0, step)
}

fn fit(data: &[(f64, f64)], degree: usize) -> Option<CurveFit<'_>> {
    // High degrees may legitimately be singular; those still count as work done
    CurveFit::new(data, degree).ok()
}

fn criterion_benchmark(c: &mut Criterion) {
    //
    // How the solver scales with data size
    println!("Benchmarking fit vs n (Degree=3)...");
    test_linear_criterion_group(
        c,
        "fit_vs_n",
        &[
            CriterionTestEntry::new("n=100", 1e2, gen_sample_data(100)),
            CriterionTestEntry::new("n=1_000", 1e3, gen_sample_data(1_000)),
            CriterionTestEntry::new("n=10_000", 1e4, gen_sample_data(10_000)),
            CriterionTestEntry::new("n=100_000", 1e5, gen_sample_data(100_000)),
        ],
        |b, data| b.iter(|| fit(black_box(data), 3)),
    );

    //
    // Same, but scaling with degree
    println!("Benchmarking fit vs degree (n=1000)...");
    let samples = gen_sample_data(1_000);
    let mut group = c.benchmark_group("fit_vs_degree");
    for degree in [1, 2, 3, 5, 10, 20] {
        group.bench_with_input(format!("Degree={degree}"), &degree, |b, &degree| {
            b.iter(|| fit(black_box(&samples), degree));
        });
    }
    group.finish();

    //
    // Full automatic sweep
    let mut group = c.benchmark_group("auto_fit");
    for n in [10, 100, 1_000] {
        let samples = gen_sample_data(n);
        group.bench_with_input(format!("n={n}"), &samples, |b, data| {
            b.iter(|| CurveFit::new_auto(black_box(data.as_slice()), &Aic).ok());
        });
    }
    group.finish();

    //
    // Parse + fit, the way a host drives it
    let text: String = gen_sample_data(1_000)
        .iter()
        .map(|(x, y)| format!("{x},{y}\n"))
        .collect();
    c.bench_function("request_from_text", |b| {
        b.iter(|| {
            FitRequest::from_text(black_box(&text), Default::default())
                .and_then(|request| request.run())
                .ok()
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn get_data_for_run<V>(group_id: &str, tests: &[CriterionTestEntry<V>]) -> Option<Vec<(f64, f64)>> {
    // Each test corresponds to a different x value in the series
    tests
        .iter()
        .map(|test| Some((test.x, get_sample_for_run(group_id, &test.id)?)))
        .collect()
}

/// Mean time per iteration from criterion's saved samples, if this run produced any.
fn get_sample_for_run(group_id: &str, test_id: &str) -> Option<f64> {
    #[derive(serde::Deserialize)]
    struct CriterionSamples {
        iters: Vec<f64>,
        times: Vec<f64>,
    }

    let raw = std::fs::read_to_string(format!(
        "target/criterion/{group_id}/{test_id}/new/sample.json"
    ))
    .ok()?;
    let samples: CriterionSamples = serde_json::from_str(&raw).ok()?;

    let mean = samples
        .iters
        .iter()
        .zip(samples.times.iter())
        .map(|(i, t)| t / i)
        .sum::<f64>()
        / (samples.iters.len() as f64);
    Some(mean)
}

struct CriterionTestEntry<V> {
    id: String,
    x: f64,
    values: V,
}
impl<V> CriterionTestEntry<V> {
    pub fn new(id: &str, x: f64, values: V) -> Self {
        Self {
            id: id.to_string(),
            x,
            values,
        }
    }
}

/// Benches each entry, then checks that time grows linearly with the entries' `x`.
fn test_linear_criterion_group<F, V>(
    c: &mut Criterion,
    id: &str,
    samples: &[CriterionTestEntry<V>],
    runner: F,
) where
    for<'a, 'b, 'c> F: Fn(&'a mut criterion::Bencher<'b>, &'c V),
{
    let mut group = c.benchmark_group(id);
    for sample in samples {
        group.bench_with_input(&sample.id, &sample.values, &runner);
    }
    group.finish();

    // Missing when criterion runs in test mode
    let Some(data) = get_data_for_run(id, samples) else {
        return;
    };
    if let Ok(linear_fit) = CurveFit::new(&data, 1) {
        println!(
            "{id}: {} (R² = {:.4})",
            linear_fit.equation(),
            linear_fit.r_squared()
        );
    }
}
