//! Benchmarks for the per-frame camera and input paths.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use vista::camera::{Camera, CameraMovement, CameraUniform};
use vista::input::{InputEvent, InputProcessor};
use vista::scene::cube_instances;

fn mouse_look_benchmark(c: &mut Criterion) {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
    c.bench_function("process_mouse_movement", |b| {
        b.iter(|| {
            camera.process_mouse_movement(
                black_box(3.0),
                black_box(-2.0),
                true,
            );
        });
    });
}

fn uniform_update_benchmark(c: &mut Criterion) {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
    let mut uniform = CameraUniform::new();
    c.bench_function("camera_uniform_update", |b| {
        b.iter(|| uniform.update(black_box(&camera), 800.0 / 600.0, 0.1, 100.0));
    });
}

fn input_frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_frame");

    for held in [1_usize, 3, 6] {
        let keys = ["KeyW", "KeyA", "Space", "KeyS", "KeyD", "ControlLeft"];
        let mut input = InputProcessor::new();
        for key in &keys[..held] {
            let _ = input.handle_event(InputEvent::key_pressed(*key));
        }
        let mut camera = Camera::default();

        group.bench_function(format!("{held}_held_keys"), |b| {
            b.iter(|| {
                let _ = input.handle_event(InputEvent::CursorMoved {
                    x: black_box(400.0),
                    y: black_box(300.0),
                });
                input.apply(&mut camera, black_box(1.0 / 60.0), true);
            });
        });
    }
    group.finish();

    c.bench_function("process_keyboard_all_directions", |b| {
        let mut camera = Camera::default();
        b.iter(|| {
            for direction in CameraMovement::ALL {
                camera.process_keyboard(direction, black_box(0.016));
            }
        });
    });
}

fn cube_layout_benchmark(c: &mut Criterion) {
    c.bench_function("cube_instances", |b| b.iter(|| black_box(cube_instances())));
}

criterion_group!(
    benches,
    mouse_look_benchmark,
    uniform_update_benchmark,
    input_frame_benchmark,
    cube_layout_benchmark
);
criterion_main!(benches);
