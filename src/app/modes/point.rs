//! Einzelkachel-Selektor: ein Cursor an genau einem Voxel.

use super::{MouseModeSelector, TileAreaSelector};
use crate::core::{CursorType, TileRect, VoxelPos};

/// Zeigt einen einzelnen Cursor am Voxel unter dem Mauszeiger.
#[derive(Debug, Clone, Default)]
pub struct PointSelector {
    base: TileAreaSelector,
    voxel: Option<VoxelPos>,
}

impl PointSelector {
    /// Selektor ohne Cursor (meldet überall `Invalid`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektor, der beim Platzieren per Mausbewegung `cursor` zeigt.
    pub fn with_cursor(cursor: CursorType) -> Self {
        Self {
            base: TileAreaSelector::with_cursor(cursor),
            voxel: None,
        }
    }

    /// Aktuell markierter Voxel.
    pub fn voxel(&self) -> Option<VoxelPos> {
        self.voxel
    }

    /// Setzt Cursor und Position. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn place(&mut self, voxel_pos: VoxelPos, cursor: CursorType) -> bool {
        if self.voxel == Some(voxel_pos) && self.base.cur_cursor == cursor {
            return false;
        }
        // Höhe oder Cursor können sich bei gleicher Kachel ändern
        self.mark_dirty();
        self.base.set_area(TileRect::single(voxel_pos.truncate()));
        self.base.cur_cursor = cursor;
        self.voxel = Some(voxel_pos);
        self.mark_dirty();
        true
    }

    /// Entfernt den Cursor (der Cursor-Typ bleibt für das nächste Platzieren erhalten).
    pub fn clear(&mut self) -> bool {
        if self.voxel.is_none() {
            return false;
        }
        self.base.set_area(TileRect::EMPTY);
        self.voxel = None;
        true
    }
}

impl MouseModeSelector for PointSelector {
    fn name(&self) -> &str {
        "Einzelkachel"
    }

    fn selector(&self) -> &TileAreaSelector {
        &self.base
    }

    fn selector_mut(&mut self) -> &mut TileAreaSelector {
        &mut self.base
    }

    fn cursor_at(&self, voxel_pos: VoxelPos) -> CursorType {
        match self.voxel {
            Some(voxel) if voxel == voxel_pos => self.base.cur_cursor,
            _ => CursorType::Invalid,
        }
    }

    fn on_pointer_move(&mut self, voxel_pos: VoxelPos) -> bool {
        let cursor = self.base.cur_cursor;
        self.place(voxel_pos, cursor)
    }

    fn reset(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RedrawRegion;
    use glam::{I16Vec2, I16Vec3};

    #[test]
    fn new_selector_reports_invalid_everywhere() {
        let selector = PointSelector::new();
        for voxel in [I16Vec3::ZERO, I16Vec3::new(5, -2, 3)] {
            assert_eq!(selector.cursor_at(voxel), CursorType::Invalid);
        }
        assert!(!selector.is_inside_area(0, 0));
    }

    #[test]
    fn cursor_only_at_exact_voxel() {
        let mut selector = PointSelector::new();
        let voxel = I16Vec3::new(4, 7, 2);
        assert!(selector.place(voxel, CursorType::South));

        assert_eq!(selector.cursor_at(voxel), CursorType::South);
        assert_eq!(selector.cursor_at(I16Vec3::new(4, 7, 3)), CursorType::Invalid);
        assert_eq!(selector.cursor_at(I16Vec3::new(5, 7, 2)), CursorType::Invalid);
        assert!(selector.is_inside_area(4, 7));
        assert!(!selector.is_inside_area(5, 7));
    }

    #[test]
    fn moving_marks_old_and_new_tile_dirty() {
        let mut selector = PointSelector::with_cursor(CursorType::Tile);
        selector.on_pointer_move(I16Vec3::new(1, 1, 0));
        selector.take_dirty();

        assert!(selector.on_pointer_move(I16Vec3::new(3, 1, 0)));
        assert_eq!(
            selector.take_dirty(),
            Some(RedrawRegion::from(TileRect::new(I16Vec2::new(1, 1), 3, 1)))
        );
    }

    #[test]
    fn same_position_is_no_change() {
        let mut selector = PointSelector::with_cursor(CursorType::Tile);
        selector.on_pointer_move(I16Vec3::new(1, 1, 0));
        selector.take_dirty();

        assert!(!selector.on_pointer_move(I16Vec3::new(1, 1, 0)));
        assert!(selector.take_dirty().is_none());
    }

    #[test]
    fn height_change_on_same_tile_redraws_tile() {
        let mut selector = PointSelector::with_cursor(CursorType::Tile);
        selector.on_pointer_move(I16Vec3::new(1, 1, 0));
        selector.take_dirty();

        assert!(selector.on_pointer_move(I16Vec3::new(1, 1, 4)));
        assert_eq!(
            selector.take_dirty(),
            Some(RedrawRegion::from(TileRect::single(I16Vec2::new(1, 1))))
        );
    }

    #[test]
    fn reset_clears_cursor_and_keeps_type() {
        let mut selector = PointSelector::with_cursor(CursorType::North);
        selector.on_pointer_move(I16Vec3::new(2, 2, 1));
        selector.reset();

        assert_eq!(selector.voxel(), None);
        assert_eq!(selector.cursor_at(I16Vec3::new(2, 2, 1)), CursorType::Invalid);
        assert!(selector.take_dirty().is_some());

        selector.on_pointer_move(I16Vec3::new(0, 0, 0));
        assert_eq!(selector.cursor_at(I16Vec3::ZERO), CursorType::North);
    }

    #[test]
    fn moving_across_whole_world_redraws_new_tile() {
        let mut selector = PointSelector::with_cursor(CursorType::Tile);
        selector.on_pointer_move(I16Vec3::new(i16::MIN, 0, 0));
        selector.on_pointer_move(I16Vec3::new(i16::MAX, 0, 0));

        let region = selector.take_dirty().expect("Bewegung muss neu zeichnen");
        assert!(region.contains(I16Vec2::new(i16::MIN, 0)));
        assert!(region.contains(I16Vec2::new(i16::MAX, 0)));
        assert_eq!(region.tile_count(), 65536);
    }
}
