//! Cursor-Szene als expliziter Übergabevertrag zwischen Selektor und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Renderer sie konsumiert.

use crate::core::{CursorType, TileRect, VoxelPos};

/// Eine zu zeichnende Cursor-Glyphe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSprite {
    /// Voxel, an dem gezeichnet wird
    pub voxel: VoxelPos,
    /// Glyphe (nie `Invalid`)
    pub cursor: CursorType,
}

/// Read-only Cursor-Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct CursorScene {
    /// Abgefragter Kachel-Ausschnitt
    pub visible: TileRect,
    /// Alle Cursor im Ausschnitt, in Scan-Reihenfolge (x, dann y, dann z)
    pub sprites: Vec<CursorSprite>,
}

impl CursorScene {
    /// Gibt `true` zurück, wenn nichts hervorgehoben wird.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Anzahl der Cursor-Glyphen.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Cursor an einem Voxel, `Invalid` wenn dort nichts gezeichnet wird.
    pub fn cursor_at(&self, voxel: VoxelPos) -> CursorType {
        self.sprites
            .iter()
            .find(|sprite| sprite.voxel == voxel)
            .map_or(CursorType::Invalid, |sprite| sprite.cursor)
    }
}
