use criterion::{criterion_group, criterion_main, Criterion};

use mandelzoom_core::{escape_time, EngineConfig, Mandelbrot, ViewportMapper};
use mandelzoom_render::{render, Palette, TILE_SIZE};

fn bench_full_frame_render(c: &mut Criterion) {
    let config = EngineConfig::new(2500, 4.0).unwrap();
    let engine = Mandelbrot::new(config);
    let mapper = ViewportMapper::new(&config, 180, 180).unwrap();
    let viewport = mapper.viewport();

    c.bench_function("sweep_180x180_2500iter", |b| {
        b.iter(|| render(&engine, viewport, TILE_SIZE));
    });
}

fn bench_deep_iterations(c: &mut Criterion) {
    let config = EngineConfig::new(10_000, 4.0).unwrap();
    let engine = Mandelbrot::new(config);
    let mapper = ViewportMapper::new(&config, 90, 90).unwrap();
    let viewport = mapper.viewport();

    c.bench_function("sweep_90x90_10000iter", |b| {
        b.iter(|| render(&engine, viewport, TILE_SIZE));
    });
}

fn bench_single_point(c: &mut Criterion) {
    c.bench_function("escape_time_origin_10000", |b| {
        b.iter(|| escape_time(criterion::black_box(0.0), criterion::black_box(0.0), 10_000, 4.0));
    });
}

fn bench_colorize(c: &mut Criterion) {
    let config = EngineConfig::new(256, 4.0).unwrap();
    let engine = Mandelbrot::new(config);
    let mapper = ViewportMapper::new(&config, 540, 540).unwrap();
    let result = render(&engine, mapper.viewport(), TILE_SIZE).unwrap();
    let palette = Palette::default();

    c.bench_function("colorize_540x540", |b| {
        b.iter(|| palette.colorize(&result.iterations));
    });
}

criterion_group!(
    benches,
    bench_full_frame_render,
    bench_deep_iterations,
    bench_single_point,
    bench_colorize
);
criterion_main!(benches);
