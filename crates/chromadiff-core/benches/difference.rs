//! Color Difference Benchmarks
//!
//! Per-metric cost of a single comparison, plus batch conversion throughput.

use chromadiff_core::{Color, Metric, Rgb, convert};
use chromadiff_core::{Cie94Preset, CmcPreset, RgbSpace};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn generate_rgb_data(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| Rgb::from_u8((i * 37 % 256) as u8, (i * 101 % 256) as u8, (i * 13 % 256) as u8))
        .collect()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_single");

    let a = Color::from_rgb(Rgb::new(255.0, 183.0, 255.0));
    let b = Color::from_rgb(Rgb::new(55.0, 65.0, 53.0));

    let metrics = [
        Metric::Cie76,
        Metric::Cie94(Cie94Preset::GraphicArts),
        Metric::Ciede2000,
        Metric::Cmc(CmcPreset::Imperceptibility),
        Metric::Din99,
        Metric::EuclideanRgb,
        Metric::WeightedEuclideanRgb,
    ];

    for metric in metrics {
        group.bench_function(metric.to_string(), |bench| {
            bench.iter(|| black_box(&a).difference(black_box(&b), metric))
        });
    }

    group.finish();
}

fn bench_rgb_to_lab(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_lab");

    for size in [100, 1000, 10000].iter() {
        let input = generate_rgb_data(*size);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_d65", size), size, |b, _| {
            b.iter(|| {
                input
                    .iter()
                    .map(|&rgb| convert::rgb_to_lab(rgb, Default::default(), RgbSpace::D65Srgb))
                    .fold(0.0, |acc, lab| acc + lab.l)
            })
        });
    }

    group.finish();
}

fn bench_ciede2000_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("ciede2000_batch");

    for size in [100, 1000, 10000].iter() {
        let colors: Vec<Color> = generate_rgb_data(*size).into_iter().map(Color::from_rgb).collect();
        let target = Color::from_hex("#808080").unwrap();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("against_gray", size), size, |b, _| {
            b.iter(|| {
                colors
                    .iter()
                    .map(|color| target.delta_e_ciede2000(color))
                    .fold(f64::MAX, f64::min)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_metrics, bench_rgb_to_lab, bench_ciede2000_batch);

criterion_main!(benches);
