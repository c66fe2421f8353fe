//! Gemeinsame Basis aller Mausmodus-Selektoren: Bereich, Cursor und Kachel-Indizierung.

use crate::core::{CursorType, RedrawRegion, TilePos, TileRect, VoxelPos};

/// Ungültiger Kachel-Index (Position außerhalb des Bereichs).
///
/// Kollidiert nie mit einem gültigen Index: der größte mögliche Index ist
/// `65535 * 65535 + 65534 < u32::MAX`.
pub const INVALID_TILE_INDEX: u32 = u32::MAX;

/// Bereich und Cursor eines Selektors plus ausstehende Redraw-Region.
///
/// Der Bereich ist eine Über-Approximation der Voxel-Stapel, die der Selektor
/// beeinflusst. Kachel-Daten (falls vorhanden) gehören dem konkreten Selektor
/// und werden über [`tile_offset`](Self::tile_offset) / [`tile_index`](Self::tile_index) adressiert.
#[derive(Debug, Clone, Default)]
pub struct TileAreaSelector {
    /// Position und Größe des selektierten Bereichs
    pub area: TileRect,
    /// Cursor, den der Selektor meldet
    pub cur_cursor: CursorType,
    /// Seit dem letzten Redraw geänderte Region
    dirty: RedrawRegion,
}

impl TileAreaSelector {
    /// Leerer Bereich, kein Cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leerer Bereich mit vorgegebenem Cursor.
    pub fn with_cursor(cursor: CursorType) -> Self {
        Self {
            cur_cursor: cursor,
            ..Self::default()
        }
    }

    /// Index einer relativen Position im Bereich. Parameter werden nicht geprüft.
    ///
    /// Der Aufrufer garantiert `rel_x < width` und `rel_y < height`.
    #[inline]
    pub fn tile_offset(&self, rel_x: u16, rel_y: u16) -> u32 {
        debug_assert!(
            rel_x < self.area.width && rel_y < self.area.height,
            "relative Position ({rel_x}, {rel_y}) außerhalb {}x{}",
            self.area.width,
            self.area.height
        );
        u32::from(rel_x) * u32::from(self.area.height) + u32::from(rel_y)
    }

    /// Index einer absoluten Welt-Position, oder [`INVALID_TILE_INDEX`] außerhalb des Bereichs.
    ///
    /// x wird vor y geprüft; die erste Achse außerhalb bricht ab.
    #[inline]
    pub fn tile_index(&self, x: i32, y: i32) -> u32 {
        let Some(rel_x) = relative(x, self.area.base.x, self.area.width) else {
            return INVALID_TILE_INDEX;
        };
        let Some(rel_y) = relative(y, self.area.base.y, self.area.height) else {
            return INVALID_TILE_INDEX;
        };
        self.tile_offset(rel_x, rel_y)
    }

    /// Wie [`tile_index`](Self::tile_index), für eine Kachelposition.
    #[inline]
    pub fn tile_index_at(&self, pos: TilePos) -> u32 {
        self.tile_index(i32::from(pos.x), i32::from(pos.y))
    }

    /// Grobe Abschätzung, ob der Selektor im Voxel-Stapel bei `(x, y)` etwas zeichnen will.
    ///
    /// `true` garantiert keine sichtbare Ausgabe, nur dass sich eine genauere Prüfung lohnt.
    #[inline]
    pub fn is_inside_area(&self, x: i32, y: i32) -> bool {
        self.tile_index(x, y) != INVALID_TILE_INDEX
    }

    /// Kachel-Index als `usize` für Vec-Zugriffe, `None` außerhalb des Bereichs.
    #[inline]
    pub fn tile_slot(&self, pos: TilePos) -> Option<usize> {
        match self.tile_index_at(pos) {
            INVALID_TILE_INDEX => None,
            index => Some(index as usize),
        }
    }

    /// Anzahl der Kacheln im Bereich (Größe der Kachel-Daten).
    pub fn tile_count(&self) -> usize {
        self.area.tile_count() as usize
    }

    /// Meldet `cur_cursor` für jeden Voxel im Bereich, sonst `Invalid`.
    #[inline]
    pub fn area_cursor(&self, voxel_pos: VoxelPos) -> CursorType {
        if self.is_inside_area(i32::from(voxel_pos.x), i32::from(voxel_pos.y)) {
            self.cur_cursor
        } else {
            CursorType::Invalid
        }
    }

    /// Markiert den aktuellen Bereich zum Neuzeichnen.
    pub fn mark_dirty(&mut self) {
        self.dirty = self.dirty.union(&RedrawRegion::from(self.area));
    }

    /// Setzt einen neuen Bereich; alter und neuer Bereich werden neu gezeichnet.
    pub fn set_area(&mut self, area: TileRect) {
        if self.area == area {
            return;
        }
        self.mark_dirty();
        log::debug!(
            "Selektor-Bereich: {:?} {}x{} → {:?} {}x{}",
            self.area.base,
            self.area.width,
            self.area.height,
            area.base,
            area.width,
            area.height
        );
        self.area = area;
        self.mark_dirty();
    }

    /// Setzt den gemeldeten Cursor.
    pub fn set_cursor(&mut self, cursor: CursorType) {
        if self.cur_cursor != cursor {
            self.cur_cursor = cursor;
            self.mark_dirty();
        }
    }

    /// Gibt `true` zurück, wenn seit dem letzten [`take_dirty`](Self::take_dirty) etwas geändert wurde.
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Entnimmt die ausstehende Redraw-Region.
    pub fn take_dirty(&mut self) -> Option<RedrawRegion> {
        let region = std::mem::take(&mut self.dirty);
        (!region.is_empty()).then_some(region)
    }
}

/// Relative Koordinate `value - base` im Bereich `[0, size)`.
#[inline]
fn relative(value: i32, base: i16, size: u16) -> Option<u16> {
    let rel = i64::from(value) - i64::from(base);
    if rel < 0 || rel >= i64::from(size) {
        return None;
    }
    Some(rel as u16)
}
