//! Benchmarks for flood fill and script execution on large canvases.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixed::{test_support::MemoryTarget, Canvas, Color, Editor};
use std::hint::black_box;

/// Canvas with vertical walls that force the fill through a long serpentine path.
fn serpentine(size: usize) -> Canvas {
    let mut canvas = Canvas::new(size, size).unwrap();
    let last = size as i64;
    for x in (2..last).step_by(2) {
        let (from, to) = if (x / 2) % 2 == 1 {
            (1, last - 1)
        } else {
            (2, last)
        };
        canvas.draw_vertical(x, from, to, Color('#')).unwrap();
    }
    canvas
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for size in [64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("open", size), &size, |b, &size| {
            let canvas = Canvas::new(size, size).unwrap();
            b.iter(|| {
                let mut canvas = canvas.clone();
                black_box(canvas.flood_fill(1, 1, Color('X')).unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("serpentine", size), &size, |b, &size| {
            let canvas = serpentine(size);
            b.iter(|| {
                let mut canvas = canvas.clone();
                black_box(canvas.flood_fill(1, 1, Color('X')).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_script(c: &mut Criterion) {
    let mut script = String::from("I 200 200\n");
    for i in 1..=200 {
        script.push_str(&format!("H 1 200 {i} A\nV {i} 1 200 B\nL {i} {i} C\n"));
    }
    script.push_str("F 1 1 D\nC\n");

    c.bench_function("run_script_200", |b| {
        b.iter(|| {
            let mut editor = Editor::with_target(1, 1, MemoryTarget::new()).unwrap();
            editor.run_script(black_box(&script)).unwrap();
            black_box(editor.render().len())
        })
    });
}

criterion_group!(benches, bench_flood_fill, bench_script);
criterion_main!(benches);
