use std::collections::HashSet;

use glam::I16Vec2;
use tile_area_selector::{TileAreaSelector, TileRect, INVALID_TILE_INDEX};

fn selector(base: I16Vec2, width: u16, height: u16) -> TileAreaSelector {
    let mut selector = TileAreaSelector::new();
    selector.area = TileRect::new(base, width, height);
    selector
}

/// Bereiche mit unterschiedlichen Basen (auch negativ) und Größen bis 5×5.
fn sample_areas() -> Vec<TileAreaSelector> {
    let bases = [
        I16Vec2::new(0, 0),
        I16Vec2::new(5, 5),
        I16Vec2::new(-3, 7),
        I16Vec2::new(-10, -10),
    ];
    let mut areas = Vec::new();
    for base in bases {
        for width in 0..=5 {
            for height in 0..=5 {
                areas.push(selector(base, width, height));
            }
        }
    }
    areas
}

#[test]
fn test_absolute_index_matches_relative_offset() {
    for sel in sample_areas() {
        let base = sel.area.base;
        for rx in 0..sel.area.width {
            for ry in 0..sel.area.height {
                let x = i32::from(base.x) + i32::from(rx);
                let y = i32::from(base.y) + i32::from(ry);
                assert_eq!(
                    sel.tile_index(x, y),
                    sel.tile_offset(rx, ry),
                    "Index bei ({x}, {y}) in {:?}",
                    sel.area
                );
                assert!(sel.is_inside_area(x, y));
            }
        }
    }
}

#[test]
fn test_positions_outside_area_are_invalid() {
    for sel in sample_areas() {
        let x0 = i32::from(sel.area.base.x);
        let y0 = i32::from(sel.area.base.y);
        let x1 = x0 + i32::from(sel.area.width);
        let y1 = y0 + i32::from(sel.area.height);

        for x in (x0 - 3)..(x1 + 3) {
            for y in (y0 - 3)..(y1 + 3) {
                let outside = x < x0 || x >= x1 || y < y0 || y >= y1;
                if outside {
                    assert_eq!(sel.tile_index(x, y), INVALID_TILE_INDEX);
                    assert!(!sel.is_inside_area(x, y));
                }
            }
        }
    }
}

#[test]
fn test_empty_area_selects_nothing() {
    let sel = TileAreaSelector::default();
    for x in -20..20 {
        for y in -20..20 {
            assert_eq!(sel.tile_index(x, y), INVALID_TILE_INDEX);
            assert!(!sel.is_inside_area(x, y));
        }
    }

    // Breite 0 bei Höhe > 0 ist ebenfalls leer
    let sel = selector(I16Vec2::new(0, 0), 0, 4);
    assert!(!sel.is_inside_area(0, 0));
}

#[test]
fn test_offsets_are_dense_and_unique() {
    for sel in sample_areas() {
        let mut seen = HashSet::new();
        for rx in 0..sel.area.width {
            for ry in 0..sel.area.height {
                let offset = sel.tile_offset(rx, ry);
                assert!((offset as usize) < sel.tile_count());
                assert!(seen.insert(offset), "Offset {offset} doppelt in {:?}", sel.area);
            }
        }
        assert_eq!(seen.len(), sel.tile_count());
    }
}

#[test]
fn test_scenario_base_5_5_size_3_2() {
    let sel = selector(I16Vec2::new(5, 5), 3, 2);
    assert_eq!(sel.tile_index(5, 5), 0);
    assert_eq!(sel.tile_index(7, 6), sel.tile_offset(2, 1));
    assert_eq!(sel.tile_index(8, 5), INVALID_TILE_INDEX);
    assert_eq!(sel.tile_index(4, 5), INVALID_TILE_INDEX);
    assert_eq!(sel.tile_index_at(I16Vec2::new(7, 6)), 5);
}
