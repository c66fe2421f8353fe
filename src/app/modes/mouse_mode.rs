//! MouseModeSelector-Trait: Schnittstelle für alle Mausmodus-Selektoren.

use super::TileAreaSelector;
use crate::core::{CursorType, RedrawRegion, VoxelPos};

/// Schnittstelle für alle Mausmodus-Selektoren (Einzelkachel, Bereich, Pfeil, Grundfläche, …).
///
/// Der Viewport fragt pro Frame für jeden sichtbaren Voxel [`cursor_at`](Self::cursor_at) ab;
/// das Fenster leitet Maus-Events an die `on_*`-Methoden weiter. Jede Methode, die den
/// sichtbaren Zustand ändert, muss [`mark_dirty`](Self::mark_dirty) aufrufen.
pub trait MouseModeSelector {
    /// Anzeigename für Logs und Statuszeile
    fn name(&self) -> &str;

    /// Gemeinsame Basis (Bereich, Cursor, Redraw-Region).
    fn selector(&self) -> &TileAreaSelector;

    /// Mutable Basis für Bereichs- und Cursor-Änderungen.
    fn selector_mut(&mut self) -> &mut TileAreaSelector;

    /// Signalisiert, dass sich die Darstellung geändert hat und neu gezeichnet werden muss.
    fn mark_dirty(&mut self) {
        self.selector_mut().mark_dirty();
    }

    /// Cursor, der am Voxel gezeichnet werden soll, oder `CursorType::Invalid`.
    ///
    /// Muss frei von Seiteneffekten sein: wird pro Frame einmal je sichtbarem Voxel aufgerufen.
    fn cursor_at(&self, voxel_pos: VoxelPos) -> CursorType;

    /// Grobe Vorab-Prüfung pro Kachel-Stapel (siehe [`TileAreaSelector::is_inside_area`]).
    #[inline]
    fn is_inside_area(&self, x: i32, y: i32) -> bool {
        self.selector().is_inside_area(x, y)
    }

    /// Entnimmt die seit dem letzten Redraw geänderte Region.
    fn take_dirty(&mut self) -> Option<RedrawRegion> {
        self.selector_mut().take_dirty()
    }

    /// Mauszeiger steht über einem neuen Voxel.
    /// Gibt `true` zurück, wenn sich der Zustand geändert hat.
    fn on_pointer_move(&mut self, _voxel_pos: VoxelPos) -> bool {
        false
    }

    /// Maustaste gedrückt (Drag-Beginn).
    fn on_drag_start(&mut self, _voxel_pos: VoxelPos) -> bool {
        false
    }

    /// Maustaste losgelassen (Drag-Ende).
    fn on_drag_end(&mut self) -> bool {
        false
    }

    /// Selektor-Zustand zurücksetzen (Escape / Moduswechsel).
    fn reset(&mut self) {}
}
