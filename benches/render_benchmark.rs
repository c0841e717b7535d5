//! Benchmarks for the per-frame work: summary computation and a full draw.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memviz::app::App;
use memviz::memory::BlockRegistry;
use memviz::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Registry with every third block allocated and every fifth freed.
fn populated_registry(count: usize) -> BlockRegistry {
    let mut registry = BlockRegistry::create(count);
    for index in 0..count {
        if index % 3 == 0 {
            registry.set(index, true, false, 10 + (index as u32 * 7) % 91);
        } else if index % 5 == 0 {
            registry.set(index, false, true, 0);
        }
    }
    registry
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_compute");

    for count in [100, 1_000, 10_000] {
        let registry = populated_registry(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &registry, |b, registry| {
            b.iter(|| black_box(registry.summary()));
        });
    }

    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame_render");

    for (width, height) in [(120u16, 40u16), (200, 60)] {
        let mut app = App::default();
        app.update_terminal_dimensions(width, height);
        app.registry = populated_registry(app.registry.len());
        app.refresh_summary();

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        group.bench_function(BenchmarkId::from_parameter(format!("{}x{}", width, height)), |b| {
            b.iter(|| {
                app.tick();
                terminal.draw(|f| ui::render(f, &app)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_summary, bench_full_frame);
criterion_main!(benches);
