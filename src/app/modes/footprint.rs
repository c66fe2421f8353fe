//! Grundflächen-Selektor: mehrkachelige Form (z.B. Fahrgeschäft) am Mauszeiger.

use glam::I16Vec2;

use super::{MouseModeSelector, TileAreaSelector};
use crate::core::{CursorType, TilePos, TileRect, VoxelPos};

/// Hebt eine beliebige Kachel-Form mit fester Höhe hervor.
///
/// Der Bereich ist das umschließende Rechteck der Form und damit eine
/// Über-Approximation: Kacheln im Rechteck, aber außerhalb der Form, bleiben leer.
#[derive(Debug, Clone)]
pub struct FootprintSelector {
    base: TileAreaSelector,
    /// Kacheln relativ zum Ursprung
    shape: Vec<TilePos>,
    /// Anzahl belegter Höhenstufen ab `origin.z`
    height: u16,
    origin: Option<VoxelPos>,
    /// Belegung pro Kachel, adressiert über `tile_offset`
    occupied: Vec<bool>,
}

impl Default for FootprintSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl FootprintSelector {
    /// Leerer Selektor (Form: eine Kachel, Höhe 1).
    pub fn new() -> Self {
        Self {
            base: TileAreaSelector::with_cursor(CursorType::Tile),
            shape: vec![I16Vec2::ZERO],
            height: 1,
            origin: None,
            occupied: Vec::new(),
        }
    }

    /// Ursprung der Form.
    pub fn origin(&self) -> Option<VoxelPos> {
        self.origin
    }

    /// Ersetzt Form und Höhe.
    pub fn set_footprint(&mut self, shape: &[TilePos], height: u16) {
        self.shape = shape.to_vec();
        self.height = height;
        self.rebuild();
    }

    /// Verschiebt die Form an einen neuen Ursprung. Gibt `true` bei Änderung zurück.
    pub fn move_to(&mut self, origin: VoxelPos) -> bool {
        if self.origin == Some(origin) {
            return false;
        }
        self.origin = Some(origin);
        self.rebuild();
        true
    }

    /// Entfernt die Form aus dem Viewport.
    pub fn clear(&mut self) -> bool {
        if self.origin.take().is_none() {
            return false;
        }
        self.rebuild();
        true
    }

    /// Absolute Kacheln der Form (außerhalb der Welt liegende fallen weg).
    fn absolute_tiles(&self) -> impl Iterator<Item = TilePos> + '_ {
        let origin = self.origin;
        self.shape.iter().filter_map(move |rel| {
            let origin = origin?;
            Some(I16Vec2::new(
                origin.x.checked_add(rel.x)?,
                origin.y.checked_add(rel.y)?,
            ))
        })
    }

    fn rebuild(&mut self) {
        let area = self
            .absolute_tiles()
            .fold(TileRect::EMPTY, |rect, pos| rect.union(&TileRect::single(pos)));

        self.mark_dirty();
        self.base.set_area(area);
        self.occupied = vec![false; self.base.tile_count()];
        let tiles: Vec<TilePos> = self.absolute_tiles().collect();
        for pos in tiles {
            if let Some(slot) = self.base.tile_slot(pos) {
                self.occupied[slot] = true;
            }
        }
        self.mark_dirty();
    }
}

impl MouseModeSelector for FootprintSelector {
    fn name(&self) -> &str {
        "Grundfläche"
    }

    fn selector(&self) -> &TileAreaSelector {
        &self.base
    }

    fn selector_mut(&mut self) -> &mut TileAreaSelector {
        &mut self.base
    }

    fn cursor_at(&self, voxel_pos: VoxelPos) -> CursorType {
        let Some(origin) = self.origin else {
            return CursorType::Invalid;
        };
        let Some(slot) = self.base.tile_slot(voxel_pos.truncate()) else {
            return CursorType::Invalid;
        };
        let level = i32::from(voxel_pos.z) - i32::from(origin.z);
        if self.occupied[slot] && level >= 0 && level < i32::from(self.height) {
            self.base.cur_cursor
        } else {
            CursorType::Invalid
        }
    }

    fn on_pointer_move(&mut self, voxel_pos: VoxelPos) -> bool {
        self.move_to(voxel_pos)
    }

    fn reset(&mut self) {
        self.clear();
    }
}
