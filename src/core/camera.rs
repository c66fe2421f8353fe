//! Viewport-Kamera: Screen-Pixel → Welt-Kacheln (Pan und Zoom).

use glam::{I16Vec2, Vec2};

use super::geometry::{TilePos, TileRect};
use crate::shared::options::{CAMERA_ZOOM_MAX, CAMERA_ZOOM_MIN, CAMERA_ZOOM_STEP, TILE_SIZE_PX};
use crate::shared::SelectorOptions;

/// 2D-Kamera über dem Kachel-Raster.
///
/// Welt-Koordinaten sind in Kachel-Einheiten; Kachel `(x, y)` deckt
/// `[x, x + 1) × [y, y + 1)` ab.
#[derive(Debug, Clone)]
pub struct ViewportCamera {
    /// Bildschirm-Mitte in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = `tile_size_px` Pixel pro Kachel)
    pub zoom: f32,
    /// Kachel-Kantenlänge in Pixeln bei Zoom 1.0
    pub tile_size_px: f32,
    zoom_min: f32,
    zoom_max: f32,
    zoom_step: f32,
}

impl ViewportCamera {
    /// Erstellt eine Kamera mit Standardwerten.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            tile_size_px: TILE_SIZE_PX,
            zoom_min: CAMERA_ZOOM_MIN,
            zoom_max: CAMERA_ZOOM_MAX,
            zoom_step: CAMERA_ZOOM_STEP,
        }
    }

    /// Erstellt eine Kamera mit Kachelgröße und Zoom-Grenzen aus den Optionen.
    pub fn from_options(options: &SelectorOptions) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0_f32.clamp(options.camera_zoom_min, options.camera_zoom_max),
            tile_size_px: options.tile_size_px.max(1.0),
            zoom_min: options.camera_zoom_min,
            zoom_max: options.camera_zoom_max,
            zoom_step: options.camera_zoom_step,
        }
    }

    /// Zentriert die Kamera auf eine Welt-Position.
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level (begrenzt auf die Zoom-Grenzen).
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(self.zoom_min, self.zoom_max);
    }

    /// Zoomt um Mausrad-Rasten (positiv = hinein).
    pub fn scroll_zoom(&mut self, notches: i32) {
        self.zoom_by(self.zoom_step.powi(notches));
    }

    /// Welt-Einheiten pro Screen-Pixel.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / (self.tile_size_px * self.zoom)
    }

    /// Konvertiert Screen-Koordinaten (Pixel, Ursprung links oben) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (screen_pos - screen_size * 0.5) * self.world_per_pixel() + self.position
    }

    /// Kachel unter einer Screen-Position. Außerhalb des i16-Bereichs wird begrenzt.
    pub fn screen_to_tile(&self, screen_pos: Vec2, screen_size: Vec2) -> TilePos {
        world_to_tile(self.screen_to_world(screen_pos, screen_size))
    }

    /// Alle (auch teilweise) sichtbaren Kacheln des Viewports.
    pub fn visible_tiles(&self, screen_size: Vec2) -> TileRect {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return TileRect::EMPTY;
        }
        let top_left = self.screen_to_tile(Vec2::ZERO, screen_size);
        // Rechter/unterer Rand ist exklusiv → ein Pixel davor
        let bottom_right = self.screen_to_tile(screen_size - Vec2::ONE, screen_size);
        TileRect::from_corners(top_left, bottom_right)
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::new()
    }
}

fn world_to_tile(world: Vec2) -> TilePos {
    let clamp = |v: f32| v.floor().clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16;
    I16Vec2::new(clamp(world.x), clamp(world.y))
}
