//! Benchmark für den Cursor-Hotpath pro Frame.
//!
//! Misst die Kosten, die der Viewport pro sichtbarem Voxel zahlt:
//! - TileAreaSelector: tile_index für Positionen innerhalb und außerhalb des Bereichs
//! - Cursor-Szene: Scan aller sichtbaren Kacheln mit is_inside_area-Vorfilter
//! - Vergleich: derselbe Scan ohne Vorfilter (cursor_at für jeden Voxel)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{I16Vec2, I16Vec3};
use std::hint::black_box;
use tile_area_selector::{
    build_cursor_scene, AreaSelector, FootprintSelector, MouseModeSelector, TileAreaSelector,
    TileRect,
};

fn build_area_selector(extent: u16) -> AreaSelector {
    let mut selector = AreaSelector::new(extent);
    selector.set_area(TileRect::new(I16Vec2::new(10, 10), extent, extent));
    selector.fill_heights(|pos| Some((pos.x + pos.y) % 8));
    selector
}

fn build_footprint_selector() -> FootprintSelector {
    let shape: Vec<I16Vec2> = (0..6)
        .flat_map(|x| (0..6).map(move |y| I16Vec2::new(x, y)))
        .filter(|p| (p.x + p.y) % 2 == 0)
        .collect();
    let mut selector = FootprintSelector::new();
    selector.set_footprint(&shape, 3);
    selector.move_to(I16Vec3::new(40, 40, 2));
    selector
}

/// Misst: tile_index über ein 256×256-Raster (überwiegend außerhalb des Bereichs)
fn bench_tile_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_index");

    for &extent in &[1u16, 16, 64] {
        let mut selector = TileAreaSelector::new();
        selector.area = TileRect::new(I16Vec2::new(100, 100), extent, extent);

        group.bench_with_input(
            BenchmarkId::new("grid_256", extent),
            &selector,
            |b, sel| {
                b.iter(|| {
                    let mut hits = 0u32;
                    for x in 0..256 {
                        for y in 0..256 {
                            if sel.is_inside_area(black_box(x), black_box(y)) {
                                hits += 1;
                            }
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

/// Misst: Cursor-Szene für einen 128×128-Ausschnitt mit 24 Höhenstufen
fn bench_cursor_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_scene");
    let visible = TileRect::new(I16Vec2::new(0, 0), 128, 128);

    for &extent in &[4u16, 32] {
        let selector = build_area_selector(extent);
        group.bench_with_input(
            BenchmarkId::new("area_prefiltered", extent),
            &selector,
            |b, sel| b.iter(|| black_box(build_cursor_scene(sel, visible, -4..=20).len())),
        );
    }

    let footprint = build_footprint_selector();
    group.bench_function("footprint_prefiltered", |b| {
        b.iter(|| black_box(build_cursor_scene(&footprint, visible, -4..=20).len()))
    });

    group.finish();
}

/// Misst: derselbe Scan ohne Vorfilter (Referenz für den Nutzen von is_inside_area)
fn bench_cursor_scan_without_prefilter(c: &mut Criterion) {
    let selector = build_area_selector(32);
    let visible = TileRect::new(I16Vec2::new(0, 0), 128, 128);

    c.bench_function("cursor_scan_unfiltered_area_32", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for tile in visible.tiles() {
                for z in -4..=20 {
                    if selector.cursor_at(tile.extend(z)).is_valid() {
                        count += 1;
                    }
                }
            }
            black_box(count)
        })
    });
}

criterion_group!(
    cursor_hotpath_benches,
    bench_tile_index,
    bench_cursor_scene,
    bench_cursor_scan_without_prefilter,
);
criterion_main!(cursor_hotpath_benches);
