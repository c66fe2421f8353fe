//! Zentrale Konfiguration für Selektoren, Cursor-Scan und Kamera.
//!
//! `SelectorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Kachel-Kantenlänge in Screen-Pixeln bei Zoom 1.0.
pub const TILE_SIZE_PX: f32 = 64.0;
/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.25;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 8.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_ZOOM_STEP: f32 = 1.1;

// ── Selektion ───────────────────────────────────────────────────────

/// Maximale Kantenlänge (Kacheln) eines aufgezogenen Bereichs.
pub const MAX_DRAG_EXTENT: u16 = 64;

// ── Cursor-Scan ─────────────────────────────────────────────────────

/// Höhenstufen unterhalb der Bodenhöhe, die pro Kachel abgefragt werden.
pub const SCAN_LEVELS_BELOW: u16 = 4;
/// Höhenstufen oberhalb der Bodenhöhe, die pro Kachel abgefragt werden.
pub const SCAN_LEVELS_ABOVE: u16 = 16;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `tile_area_selector.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Kachel-Kantenlänge in Pixeln bei Zoom 1.0
    pub tile_size_px: f32,
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_zoom_step: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Maximale Kantenlänge eines Drag-Bereichs in Kacheln
    pub max_drag_extent: u16,

    // ── Cursor-Scan ─────────────────────────────────────────────
    /// Höhenstufen unterhalb der Bodenhöhe
    pub scan_levels_below: u16,
    /// Höhenstufen oberhalb der Bodenhöhe
    pub scan_levels_above: u16,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            tile_size_px: TILE_SIZE_PX,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            max_drag_extent: MAX_DRAG_EXTENT,
            scan_levels_below: SCAN_LEVELS_BELOW,
            scan_levels_above: SCAN_LEVELS_ABOVE,
        }
    }
}

impl SelectorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("tile_area_selector"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("tile_area_selector.toml")
    }

    /// Höhenstufen, die der Cursor-Scan um eine Bodenhöhe herum abfragt.
    pub fn scan_levels(&self, ground_z: i16) -> std::ops::RangeInclusive<i16> {
        let low = i32::from(ground_z) - i32::from(self.scan_levels_below);
        let high = i32::from(ground_z) + i32::from(self.scan_levels_above);
        let clamp = |v: i32| v.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
        clamp(low)..=clamp(high)
    }
}
