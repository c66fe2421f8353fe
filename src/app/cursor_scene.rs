//! Builder für Cursor-Szenen: Scan aller sichtbaren Voxel gegen den aktiven Selektor.

use std::ops::RangeInclusive;

use super::modes::{MouseModeSelector, SelectorHost};
use crate::core::{TileRect, VoxelPos};
use crate::shared::{CursorScene, CursorSprite};

/// Baut die Cursor-Szene für den sichtbaren Ausschnitt.
///
/// Pro Kachel dient `is_inside_area` als Vorfilter, erst dann wird jede Höhenstufe
/// aus `levels` per `cursor_at` abgefragt.
pub fn build(
    selector: &dyn MouseModeSelector,
    visible: TileRect,
    levels: RangeInclusive<i16>,
) -> CursorScene {
    let mut sprites = Vec::new();
    for tile in visible.tiles() {
        if !selector.is_inside_area(i32::from(tile.x), i32::from(tile.y)) {
            continue;
        }
        for z in levels.clone() {
            let voxel = VoxelPos::new(tile.x, tile.y, z);
            let cursor = selector.cursor_at(voxel);
            if cursor.is_valid() {
                sprites.push(CursorSprite { voxel, cursor });
            }
        }
    }
    CursorScene { visible, sprites }
}

/// Baut die Cursor-Szene für den aktiven Selektor des Hosts (leer ohne Selektor).
pub fn build_for_host(
    host: &SelectorHost,
    visible: TileRect,
    levels: RangeInclusive<i16>,
) -> CursorScene {
    match host.active() {
        Some(selector) => build(selector, visible, levels),
        None => CursorScene {
            visible,
            sprites: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{AreaSelector, FootprintSelector, PointSelector};
    use crate::core::CursorType;
    use glam::{I16Vec2, I16Vec3};

    fn view() -> TileRect {
        TileRect::new(I16Vec2::new(-8, -8), 16, 16)
    }

    #[test]
    fn scene_contains_only_highlighted_voxels() {
        let mut selector = FootprintSelector::new();
        selector.set_footprint(&[I16Vec2::new(0, 0), I16Vec2::new(1, 1)], 2);
        selector.move_to(I16Vec3::new(2, 2, 1));

        let scene = build(&selector, view(), 0..=4);
        assert_eq!(scene.len(), 4);
        assert_eq!(scene.cursor_at(I16Vec3::new(3, 3, 2)), CursorType::Tile);
        assert_eq!(scene.cursor_at(I16Vec3::new(3, 2, 1)), CursorType::Invalid);
        assert!(scene
            .sprites
            .iter()
            .all(|sprite| sprite.cursor.is_valid()));
    }

    #[test]
    fn selection_outside_view_is_skipped() {
        let mut selector = PointSelector::with_cursor(CursorType::East);
        selector.place(I16Vec3::new(100, 0, 0), CursorType::East);

        let scene = build(&selector, view(), 0..=0);
        assert!(scene.is_empty());
        assert_eq!(scene.visible, view());
    }

    #[test]
    fn area_partially_visible_is_clipped() {
        let mut selector = AreaSelector::default();
        selector.set_area(TileRect::new(I16Vec2::new(6, 0), 4, 1));
        selector.fill_heights(|_| Some(0));

        let scene = build(&selector, view(), -1..=1);
        let tiles: Vec<i16> = scene.sprites.iter().map(|s| s.voxel.x).collect();
        assert_eq!(tiles, vec![6, 7]);
    }

    #[test]
    fn host_without_selector_builds_empty_scene() {
        let host = SelectorHost::new();
        assert!(build_for_host(&host, view(), 0..=8).is_empty());
    }
}
