use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use selection_history::{Element, RegistryController, SelectionRegistry, Snapshot};
use std::hint::black_box;

fn build_selection(size: usize) -> Vec<Element> {
    (0..size)
        .map(|i| Element::new(format!("pCube1.vtx[{i}]")))
        .collect()
}

fn build_registry(entry_count: usize) -> SelectionRegistry {
    let mut registry = SelectionRegistry::new();
    for index in 0..entry_count {
        let snapshot = Snapshot::new(build_selection(8));
        registry
            .put(format!("sel{index}"), snapshot)
            .expect("put failed");
    }
    registry
}

fn bench_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");

    for &selection_size in &[10usize, 10_000usize] {
        let selection = build_selection(selection_size);

        group.bench_with_input(
            BenchmarkId::new("capture_new_nickname", selection_size),
            &selection,
            |b, selection| {
                b.iter(|| {
                    let mut registry = SelectionRegistry::new();
                    let captured = RegistryController::new(&mut registry)
                        .capture(black_box("Bench"), selection.clone())
                        .expect("capture failed");
                    black_box(captured.delta)
                })
            },
        );
    }

    group.finish();
}

fn bench_discard(c: &mut Criterion) {
    let mut group = c.benchmark_group("discard");

    for &entry_count in &[100usize, 10_000usize] {
        let registry = build_registry(entry_count);

        group.bench_with_input(
            BenchmarkId::new("discard_first_entry", entry_count),
            &registry,
            |b, registry| {
                b.iter(|| {
                    let mut registry = registry.clone();
                    let delta = RegistryController::new(&mut registry)
                        .discard(black_box(Some("sel0")))
                        .expect("discard failed");
                    black_box(delta)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_capture, bench_discard);
criterion_main!(benches);
