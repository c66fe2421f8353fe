//! Trait-basiertes Mausmodus-System für Viewport-Selektoren.
//!
//! Jeder Selektor implementiert den `MouseModeSelector`-Trait und wird vom
//! `SelectorHost` (dem besitzenden Fenster) gehalten. Der Renderer fragt pro
//! Voxel `cursor_at` ab; Änderungen werden als Redraw-Region gesammelt.

/// Bereichs-Selektor (Drag-Rechteck mit Höhe pro Kachel).
pub mod area;
/// Richtungs-Selektor (Bau-Pfeil).
pub mod arrow;
/// Grundflächen-Selektor (mehrkachelige Form).
pub mod footprint;
/// MouseModeSelector-Trait: Schnittstelle für alle Selektoren.
mod mouse_mode;
/// Einzelkachel-Selektor.
pub mod point;
/// Gemeinsame Basis: Bereich, Cursor, Kachel-Indizierung.
mod selector;

pub use area::{AreaSelector, TileData};
pub use arrow::ArrowSelector;
pub use footprint::FootprintSelector;
pub use mouse_mode::MouseModeSelector;
pub use point::PointSelector;
pub use selector::{TileAreaSelector, INVALID_TILE_INDEX};

use crate::core::{CursorType, RedrawRegion, VoxelPos};

// ── SelectorHost ─────────────────────────────────────────────────

/// Hält den aktiven Selektor eines Fensters und sammelt Redraw-Anforderungen.
///
/// Mehrere Änderungen vor dem nächsten Frame werden zu einer Region zusammengefasst.
#[derive(Default)]
pub struct SelectorHost {
    active: Option<Box<dyn MouseModeSelector>>,
    pending_redraw: Option<RedrawRegion>,
}

impl SelectorHost {
    /// Erstellt einen Host ohne aktiven Selektor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktiviert einen Selektor; ein vorher aktiver wird beendet.
    pub fn activate(&mut self, mut selector: Box<dyn MouseModeSelector>) {
        self.deactivate();
        log::info!("Mausmodus aktiviert: {}", selector.name());
        selector.mark_dirty();
        self.absorb(selector.as_mut());
        self.active = Some(selector);
    }

    /// Beendet den aktiven Selektor; sein Bereich wird noch neu gezeichnet.
    pub fn deactivate(&mut self) -> Option<Box<dyn MouseModeSelector>> {
        let mut selector = self.active.take()?;
        selector.mark_dirty();
        self.absorb(selector.as_mut());
        log::info!("Mausmodus beendet: {}", selector.name());
        Some(selector)
    }

    /// Gibt `true` zurück, wenn ein Selektor aktiv ist.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Gibt eine Referenz auf den aktiven Selektor zurück.
    pub fn active(&self) -> Option<&dyn MouseModeSelector> {
        self.active.as_deref()
    }

    /// Gibt eine mutable Referenz auf den aktiven Selektor zurück.
    ///
    /// Direkte Änderungen werden beim nächsten [`collect_redraw`](Self::collect_redraw) eingesammelt.
    pub fn active_mut(&mut self) -> Option<&mut dyn MouseModeSelector> {
        let selector = self.active.as_mut()?;
        Some(selector.as_mut())
    }

    /// Cursor am Voxel; ohne aktiven Selektor immer `Invalid`.
    #[inline]
    pub fn cursor_at(&self, voxel_pos: VoxelPos) -> CursorType {
        self.active
            .as_ref()
            .map_or(CursorType::Invalid, |selector| selector.cursor_at(voxel_pos))
    }

    /// Leitet eine Mausbewegung weiter. Gibt `true` zurück, wenn neu gezeichnet werden muss.
    pub fn pointer_moved(&mut self, voxel_pos: VoxelPos) -> bool {
        self.forward(|selector| selector.on_pointer_move(voxel_pos))
    }

    /// Leitet einen Drag-Beginn weiter.
    pub fn drag_started(&mut self, voxel_pos: VoxelPos) -> bool {
        self.forward(|selector| selector.on_drag_start(voxel_pos))
    }

    /// Leitet ein Drag-Ende weiter.
    pub fn drag_ended(&mut self) -> bool {
        self.forward(|selector| selector.on_drag_end())
    }

    /// Setzt den aktiven Selektor zurück (Escape), ohne ihn zu beenden.
    pub fn reset(&mut self) {
        self.forward(|selector| {
            selector.reset();
            true
        });
    }

    fn forward(&mut self, event: impl FnOnce(&mut dyn MouseModeSelector) -> bool) -> bool {
        let Some(selector) = self.active.as_mut() else {
            return false;
        };
        let changed = event(selector.as_mut());
        if let Some(region) = selector.take_dirty() {
            self.merge_redraw(region);
        }
        changed
    }

    fn absorb(&mut self, selector: &mut dyn MouseModeSelector) {
        if let Some(region) = selector.take_dirty() {
            self.merge_redraw(region);
        }
    }

    fn merge_redraw(&mut self, region: RedrawRegion) {
        self.pending_redraw = Some(match self.pending_redraw {
            Some(pending) => pending.union(&region),
            None => region,
        });
    }

    /// Gibt `true` zurück, wenn vor dem nächsten Frame neu gezeichnet werden muss.
    pub fn has_pending_redraw(&self) -> bool {
        self.pending_redraw.is_some()
            || self
                .active
                .as_ref()
                .is_some_and(|selector| selector.selector().is_dirty())
    }

    /// Entnimmt die zusammengefasste Redraw-Region seit dem letzten Aufruf.
    pub fn collect_redraw(&mut self) -> Option<RedrawRegion> {
        if let Some(selector) = self.active.as_mut() {
            if let Some(region) = selector.take_dirty() {
                self.merge_redraw(region);
            }
        }
        self.pending_redraw.take()
    }
}
