//! Benchmarks for wire-rs operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Import crates for benchmarking
use wire_camera::Camera;
use wire_core::{Canvas, Rgb};
use wire_math::{Vec3, Vec4};
use wire_raster::{Tri2, Tri3};

/// Benchmark 4x4 matrix algebra.
fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");

    let camera = Camera::default();
    let view = camera.view_transform();
    let projection = camera.projection_transform();
    let world_to_screen = camera.world_to_screen(1920, 1080);
    let point = Vec4::from_point(Vec3::new(0.3, -0.2, -4.0));

    group.bench_function("mul", |b| {
        b.iter(|| black_box(projection) * black_box(view))
    });

    group.bench_function("transform", |b| {
        b.iter(|| world_to_screen.transform(black_box(point)))
    });

    group.bench_function("transpose", |b| {
        b.iter(|| black_box(world_to_screen).transpose())
    });

    group.finish();
}

/// Benchmark camera matrix construction.
fn bench_camera(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera");

    let camera = Camera {
        eye: Vec3::new(3.0, 2.0, 5.0),
        at: Vec3::new(0.0, 0.0, -1.0),
        aspect: 1920.0 / 1080.0,
        ..Camera::default()
    };

    group.bench_function("view", |b| {
        b.iter(|| black_box(&camera).view_transform())
    });

    group.bench_function("world_to_screen", |b| {
        b.iter(|| black_box(&camera).world_to_screen(1920, 1080))
    });

    group.finish();
}

/// Benchmark the projection of world points to pixels.
fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");

    let camera = Camera::default();
    let transform = camera.world_to_screen(1920, 1080);

    for size in [1000, 10000, 100000].iter() {
        let points: Vec<Vec3> = (0..*size)
            .map(|i| {
                let t = i as f64 / *size as f64;
                Vec3::new(t * 2.0 - 1.0, 1.0 - t, -1.0 - t * 9.0)
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("points", size), &points, |b, points| {
            b.iter(|| {
                points
                    .iter()
                    .map(|&p| wire_raster::project_point(black_box(&transform), p))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark rasterization onto a canvas.
fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");

    let mut canvas = Canvas::new(1920, 1080).unwrap();

    group.bench_function("line_horizontal", |b| {
        b.iter(|| {
            wire_raster::draw_line(&mut canvas, 0, 540, 1919, 540, black_box(Rgb::GREEN));
        })
    });

    group.bench_function("line_diagonal", |b| {
        b.iter(|| {
            wire_raster::draw_line(&mut canvas, 0, 0, 1919, 1079, black_box(Rgb::GREEN));
        })
    });

    group.bench_function("dot", |b| {
        b.iter(|| {
            wire_raster::draw_dot(&mut canvas, 960, 540, black_box(Rgb::RED));
        })
    });

    let tri = Tri2::new((100, 900), (960, 100), (1820, 900));
    group.bench_function("triangle_edges", |b| {
        b.iter(|| {
            black_box(&tri).draw(&mut canvas, Rgb::WHITE);
        })
    });

    group.finish();
}

/// Benchmark a full wireframe frame: clear, project and draw.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let camera = Camera {
        aspect: 1920.0 / 1080.0,
        ..Camera::default()
    };
    let transform = camera.world_to_screen(1920, 1080);
    let mut canvas = Canvas::new(1920, 1080).unwrap();

    for &tri_count in &[10, 100, 1000] {
        let tris: Vec<Tri3> = (0..tri_count)
            .map(|i| {
                let t = i as f64 / tri_count as f64;
                let z = -2.0 - t * 8.0;
                Tri3::new(
                    Vec3::new(t * 2.0 - 1.5, -0.5, z),
                    Vec3::new(t * 2.0 - 1.0, 0.5, z),
                    Vec3::new(t * 2.0 - 0.5, -0.5, z),
                )
            })
            .collect();

        group.throughput(Throughput::Elements(tri_count as u64));

        group.bench_with_input(BenchmarkId::new("wireframe", tri_count), &tris, |b, tris| {
            b.iter(|| {
                canvas.clear();
                for tri in tris {
                    tri.project(black_box(&transform)).draw(&mut canvas, Rgb::GREEN);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mat4,
    bench_camera,
    bench_project,
    bench_raster,
    bench_frame,
);

criterion_main!(benches);
