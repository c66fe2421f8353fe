//! Bereichs-Selektor: per Drag aufgezogenes Rechteck mit Höhen pro Kachel.

use glam::I16Vec2;

use super::{MouseModeSelector, TileAreaSelector};
use crate::core::{CursorType, TilePos, TileRect, VoxelPos};
use crate::shared::options::MAX_DRAG_EXTENT;
use crate::shared::SelectorOptions;

/// Kachel-Daten des Bereichs-Selektors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileData {
    /// Kachel wird hervorgehoben
    pub enabled: bool,
    /// Höhenstufe, auf der der Cursor gezeichnet wird
    pub cursor_z: i16,
}

/// Rechteckiger Bereich (z.B. Terrain-Bearbeitung), aufgezogen per Drag.
///
/// Kachel-Daten liegen in einem Vec, adressiert über
/// [`TileAreaSelector::tile_offset`] (x-Spalte für x-Spalte).
#[derive(Debug, Clone)]
pub struct AreaSelector {
    base: TileAreaSelector,
    tiles: Vec<TileData>,
    /// Drag-Startkachel und Höhe
    drag_start: Option<(TilePos, i16)>,
    max_extent: u16,
}

impl Default for AreaSelector {
    fn default() -> Self {
        Self::new(MAX_DRAG_EXTENT)
    }
}

impl AreaSelector {
    /// Erstellt einen leeren Bereichs-Selektor mit Kachel-Cursor.
    pub fn new(max_extent: u16) -> Self {
        Self {
            base: TileAreaSelector::with_cursor(CursorType::Tile),
            tiles: Vec::new(),
            drag_start: None,
            max_extent: max_extent.max(1),
        }
    }

    /// Erstellt einen Bereichs-Selektor mit der Drag-Grenze aus den Optionen.
    pub fn from_options(options: &SelectorOptions) -> Self {
        Self::new(options.max_drag_extent)
    }

    /// Aktueller Bereich.
    pub fn area(&self) -> TileRect {
        self.base.area
    }

    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Kachel-Daten an einer Welt-Position.
    pub fn tile(&self, pos: TilePos) -> Option<&TileData> {
        self.tiles.get(self.base.tile_slot(pos)?)
    }

    /// Setzt einen neuen Bereich. Kacheln, die in beiden Bereichen liegen, behalten ihre Daten;
    /// neue Kacheln sind deaktiviert.
    pub fn set_area(&mut self, area: TileRect) {
        self.resize(area, TileData::default());
    }

    fn resize(&mut self, area: TileRect, fill: TileData) {
        if area == self.base.area {
            return;
        }
        let old = self.base.clone();
        let old_tiles = std::mem::take(&mut self.tiles);

        self.base.set_area(area);
        self.tiles = vec![fill; self.base.tile_count()];
        for pos in old.area.intersect(&area).tiles() {
            if let (Some(from), Some(to)) = (old.tile_slot(pos), self.base.tile_slot(pos)) {
                self.tiles[to] = old_tiles[from];
            }
        }
    }

    /// Aktiviert eine Kachel auf der gegebenen Höhe. Gibt `true` bei Änderung zurück.
    pub fn set_tile(&mut self, pos: TilePos, cursor_z: i16) -> bool {
        self.update_tile(
            pos,
            TileData {
                enabled: true,
                cursor_z,
            },
        )
    }

    /// Deaktiviert eine Kachel. Gibt `true` bei Änderung zurück.
    pub fn disable_tile(&mut self, pos: TilePos) -> bool {
        let Some(current) = self.tile(pos).copied() else {
            return false;
        };
        self.update_tile(
            pos,
            TileData {
                enabled: false,
                ..current
            },
        )
    }

    fn update_tile(&mut self, pos: TilePos, data: TileData) -> bool {
        let Some(slot) = self.base.tile_slot(pos) else {
            return false;
        };
        if self.tiles[slot] == data {
            return false;
        }
        self.tiles[slot] = data;
        self.mark_dirty();
        true
    }

    /// Setzt Höhen für alle Kacheln des Bereichs; `None` deaktiviert die Kachel.
    ///
    /// `height_at` ist der Terrain-Höhenanbieter des Aufrufers.
    pub fn fill_heights(&mut self, mut height_at: impl FnMut(TilePos) -> Option<i16>) {
        let area = self.base.area;
        for rel_x in 0..area.width {
            for rel_y in 0..area.height {
                let x = i32::from(area.base.x) + i32::from(rel_x);
                let y = i32::from(area.base.y) + i32::from(rel_y);
                let (Ok(x), Ok(y)) = (i16::try_from(x), i16::try_from(y)) else {
                    continue;
                };
                let offset = self.base.tile_offset(rel_x, rel_y) as usize;
                self.tiles[offset] = match height_at(I16Vec2::new(x, y)) {
                    Some(cursor_z) => TileData {
                        enabled: true,
                        cursor_z,
                    },
                    None => TileData::default(),
                };
            }
        }
        self.mark_dirty();
    }

    /// Startet einen Drag an der Kachel; der Bereich ist zunächst diese eine Kachel.
    pub fn begin_drag(&mut self, voxel_pos: VoxelPos) -> bool {
        let pos = voxel_pos.truncate();
        self.drag_start = Some((pos, voxel_pos.z));
        self.hover(voxel_pos)
    }

    /// Zieht den Bereich bis zur Kachel auf (Kantenlänge begrenzt auf `max_extent`).
    ///
    /// Neue Kacheln werden auf der Drag-Starthöhe aktiviert.
    pub fn drag_to(&mut self, pos: TilePos) -> bool {
        let Some((start, start_z)) = self.drag_start else {
            return false;
        };
        let end = clamp_drag_end(start, pos, self.max_extent);
        if end != pos {
            log::debug!(
                "Drag-Bereich auf {} Kacheln begrenzt: {:?} → {:?}",
                self.max_extent,
                pos,
                end
            );
        }
        let area = TileRect::from_corners(start, end);
        let changed = area != self.base.area;
        self.resize(
            area,
            TileData {
                enabled: true,
                cursor_z: start_z,
            },
        );
        changed
    }

    /// Beendet den Drag; der Bereich bleibt erhalten.
    pub fn end_drag(&mut self) -> bool {
        self.drag_start.take().is_some()
    }

    /// Ohne Drag: Bereich folgt dem Mauszeiger als einzelne Kachel.
    fn hover(&mut self, voxel_pos: VoxelPos) -> bool {
        let pos = voxel_pos.truncate();
        let moved = self.base.area != TileRect::single(pos);
        self.resize(TileRect::single(pos), TileData::default());
        let height_changed = self.set_tile(pos, voxel_pos.z);
        moved || height_changed
    }
}

/// Begrenzt den Drag-Endpunkt, sodass keine Kante länger als `max_extent` wird.
fn clamp_drag_end(start: TilePos, end: TilePos, max_extent: u16) -> TilePos {
    let reach = i32::from(max_extent.max(1)) - 1;
    let clamp_axis = |s: i16, e: i16| {
        let delta = (i32::from(e) - i32::from(s)).clamp(-reach, reach);
        (i32::from(s) + delta).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
    };
    I16Vec2::new(clamp_axis(start.x, end.x), clamp_axis(start.y, end.y))
}

impl MouseModeSelector for AreaSelector {
    fn name(&self) -> &str {
        "Bereich"
    }

    fn selector(&self) -> &TileAreaSelector {
        &self.base
    }

    fn selector_mut(&mut self) -> &mut TileAreaSelector {
        &mut self.base
    }

    fn cursor_at(&self, voxel_pos: VoxelPos) -> CursorType {
        match self.tile(voxel_pos.truncate()) {
            Some(data) if data.enabled && data.cursor_z == voxel_pos.z => self.base.cur_cursor,
            _ => CursorType::Invalid,
        }
    }

    fn on_pointer_move(&mut self, voxel_pos: VoxelPos) -> bool {
        if self.is_dragging() {
            self.drag_to(voxel_pos.truncate())
        } else {
            self.hover(voxel_pos)
        }
    }

    fn on_drag_start(&mut self, voxel_pos: VoxelPos) -> bool {
        self.begin_drag(voxel_pos)
    }

    fn on_drag_end(&mut self) -> bool {
        self.end_drag()
    }

    fn reset(&mut self) {
        self.drag_start = None;
        self.set_area(TileRect::EMPTY);
    }
}
