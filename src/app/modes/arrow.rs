//! Richtungs-Selektor: Bau-Pfeil auf der Nachbarkachel in Baurichtung.

use super::{MouseModeSelector, TileAreaSelector};
use crate::core::{CursorType, TileEdge, TileRect, VoxelPos};

/// Zeigt einen Bau-Pfeil auf der Kachel hinter der gewählten Kante des Ankers.
#[derive(Debug, Clone, Default)]
pub struct ArrowSelector {
    base: TileAreaSelector,
    anchor: Option<VoxelPos>,
    edge: TileEdge,
}

impl ArrowSelector {
    /// Selektor ohne Anker, Baurichtung Nordost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Baurichtung.
    pub fn edge(&self) -> TileEdge {
        self.edge
    }

    /// Voxel, an dem der Pfeil gezeichnet wird.
    pub fn target(&self) -> Option<VoxelPos> {
        let anchor = self.anchor?;
        let delta = self.edge.delta();
        Some(VoxelPos::new(
            anchor.x.checked_add(delta.x)?,
            anchor.y.checked_add(delta.y)?,
            anchor.z,
        ))
    }

    /// Setzt Anker und Richtung. Gibt `true` bei Änderung zurück.
    pub fn place(&mut self, anchor: VoxelPos, edge: TileEdge) -> bool {
        if self.anchor == Some(anchor) && self.edge == edge {
            return false;
        }
        self.anchor = Some(anchor);
        self.edge = edge;
        self.sync();
        true
    }

    /// Ändert nur die Baurichtung.
    pub fn set_edge(&mut self, edge: TileEdge) -> bool {
        if self.edge == edge {
            return false;
        }
        self.edge = edge;
        self.sync();
        true
    }

    /// Dreht die Baurichtung im Uhrzeigersinn weiter.
    pub fn rotate(&mut self) -> bool {
        self.set_edge(self.edge.rotate_cw())
    }

    /// Entfernt den Pfeil (die Richtung bleibt erhalten).
    pub fn clear(&mut self) -> bool {
        if self.anchor.take().is_none() {
            return false;
        }
        self.sync();
        true
    }

    /// Bereich und Cursor aus Anker und Richtung ableiten.
    fn sync(&mut self) {
        let target = self.target();
        let area = target.map_or(TileRect::EMPTY, |t| TileRect::single(t.truncate()));
        // Höhe kann sich bei gleichem Bereich ändern → immer beide Zustände markieren
        self.mark_dirty();
        self.base.set_area(area);
        self.base.cur_cursor = CursorType::arrow(self.edge);
        self.mark_dirty();
    }
}

impl MouseModeSelector for ArrowSelector {
    fn name(&self) -> &str {
        "Baurichtung"
    }

    fn selector(&self) -> &TileAreaSelector {
        &self.base
    }

    fn selector_mut(&mut self) -> &mut TileAreaSelector {
        &mut self.base
    }

    fn cursor_at(&self, voxel_pos: VoxelPos) -> CursorType {
        if self.target() == Some(voxel_pos) {
            self.base.cur_cursor
        } else {
            CursorType::Invalid
        }
    }

    fn on_pointer_move(&mut self, voxel_pos: VoxelPos) -> bool {
        self.place(voxel_pos, self.edge)
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
    fn arrow_is_drawn_on_neighbour_tile() {
        let mut selector = ArrowSelector::new();
        selector.place(I16Vec3::new(5, 5, 2), TileEdge::SouthEast);

        assert_eq!(selector.target(), Some(I16Vec3::new(5, 6, 2)));
        assert_eq!(
            selector.cursor_at(I16Vec3::new(5, 6, 2)),
            CursorType::ArrowSe
        );
        assert_eq!(selector.cursor_at(I16Vec3::new(5, 5, 2)), CursorType::Invalid);
        assert!(selector.is_inside_area(5, 6));
        assert!(!selector.is_inside_area(5, 5));
    }

    #[test]
    fn rotate_moves_arrow_and_marks_both_tiles() {
        let mut selector = ArrowSelector::new();
        selector.place(I16Vec3::new(0, 0, 0), TileEdge::NorthEast);
        selector.take_dirty();

        assert!(selector.rotate());
        assert_eq!(selector.edge(), TileEdge::SouthEast);
        assert_eq!(
            selector.cursor_at(I16Vec3::new(0, 1, 0)),
            CursorType::ArrowSe
        );
        // Alt: (-1, 0), neu: (0, 1)
        assert_eq!(
            selector.take_dirty(),
            Some(RedrawRegion::from(TileRect::new(I16Vec2::new(-1, 0), 2, 2)))
        );
    }

    #[test]
    fn arrow_beyond_world_edge_is_not_drawn() {
        let mut selector = ArrowSelector::new();
        selector.place(I16Vec3::new(i16::MIN, 0, 0), TileEdge::NorthEast);

        assert_eq!(selector.target(), None);
        assert!(selector.selector().area.is_empty());
        assert_eq!(
            selector.cursor_at(I16Vec3::new(i16::MIN, 0, 0)),
            CursorType::Invalid
        );
    }

    #[test]
    fn pointer_move_keeps_direction() {
        let mut selector = ArrowSelector::new();
        selector.set_edge(TileEdge::NorthWest);
        assert!(selector.on_pointer_move(I16Vec3::new(3, 3, 1)));
        assert!(!selector.on_pointer_move(I16Vec3::new(3, 3, 1)));
        assert_eq!(
            selector.cursor_at(I16Vec3::new(3, 2, 1)),
            CursorType::ArrowNw
        );
    }

    #[test]
    fn reset_removes_arrow() {
        let mut selector = ArrowSelector::new();
        selector.place(I16Vec3::new(1, 1, 1), TileEdge::SouthWest);
        selector.reset();

        assert_eq!(selector.target(), None);
        assert_eq!(selector.cursor_at(I16Vec3::new(2, 1, 1)), CursorType::Invalid);
        assert!(!selector.clear());
    }
}
