//! Benchmarks for the stitchpx pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};

use stitchpx::{
    generate, render_chart, resample, Algorithm, ChartStyle, GenerationRequest, Palette, PixelGrid,
};

/// A synthetic 256x256 source with smooth gradients and a hard edge.
fn source_image() -> DynamicImage {
    let mut img = RgbaImage::new(256, 256);
    for y in 0..256 {
        for x in 0..256 {
            let r = x as u8;
            let g = y as u8;
            let b = if x < 128 { 32 } else { 224 };
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }
    DynamicImage::ImageRgba8(img)
}

/// A quantization input grid with varied colours.
fn varied_grid(width: usize, height: usize) -> PixelGrid {
    let mut grid = PixelGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let i = grid.idx(x, y);
            grid.data_mut()[i..i + 4].copy_from_slice(&[
                ((x * 2) % 256) as u8,
                ((y * 2) % 256) as u8,
                (((x + y) * 3) % 256) as u8,
                255,
            ]);
        }
    }
    grid
}

// -- Resampling benchmarks --

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    let image = source_image();

    group.bench_function("resample_50", |b| {
        b.iter(|| resample(black_box(&image), 50, 50).unwrap())
    });

    group.bench_function("resample_200", |b| {
        b.iter(|| resample(black_box(&image), 200, 200).unwrap())
    });

    group.finish();
}

// -- Filter benchmarks --

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    let palette = Palette::basic();

    for algorithm in Algorithm::ALL {
        let input = varied_grid(100, 100);
        group.bench_function(algorithm.id(), |b| {
            b.iter(|| {
                let mut grid = input.clone();
                algorithm.apply(black_box(&mut grid), &palette);
                grid
            })
        });
    }

    // Cartoon's 5x5 neighbourhood at the conventional maximum is the
    // worst-case filter cost
    let input = varied_grid(200, 200);
    group.bench_function("cartoon_200", |b| {
        b.iter(|| {
            let mut grid = input.clone();
            Algorithm::Cartoon.apply(black_box(&mut grid), &palette);
            grid
        })
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let mut grid = varied_grid(60, 60);
    Algorithm::Simple.apply(&mut grid, &Palette::basic());

    let style = ChartStyle::default();
    group.bench_function("render_chart_60", |b| {
        b.iter(|| render_chart(black_box(&grid), &style))
    });

    let plain = ChartStyle {
        show_grid: false,
        ..ChartStyle::default()
    };
    group.bench_function("render_chart_60_no_grid", |b| {
        b.iter(|| render_chart(black_box(&grid), &plain))
    });

    group.finish();
}

// -- End-to-end benchmarks --

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    let image = source_image();

    for algorithm in [Algorithm::Simple, Algorithm::FloydSteinberg, Algorithm::Cartoon] {
        let request = GenerationRequest {
            width: 60,
            height: 60,
            algorithm,
            palette: Palette::basic(),
            style: ChartStyle::default(),
        };
        group.bench_function(format!("generate_60_{}", algorithm.id()), |b| {
            b.iter(|| generate(black_box(&image), &request).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resample, bench_filters, bench_render, bench_generate);
criterion_main!(benches);
