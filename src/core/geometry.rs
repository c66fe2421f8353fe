//! Kachel- und Voxel-Geometrie: Positionen und achsparallele Kachel-Rechtecke.

use glam::{I16Vec2, I16Vec3, IVec2};

/// 2D-Kachelposition in Welt-Koordinaten.
pub type TilePos = I16Vec2;

/// 3D-Voxelposition in Welt-Koordinaten (`z` = Höhenstufe im Kachel-Stapel).
pub type VoxelPos = I16Vec3;

/// Achsparalleles Rechteck über dem Kachel-Raster.
///
/// `width` oder `height` gleich 0 bedeutet: leerer Bereich, selektiert nichts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileRect {
    /// Linke obere Ecke (kleinste x/y-Koordinate)
    pub base: TilePos,
    /// Ausdehnung in x-Richtung (Kacheln)
    pub width: u16,
    /// Ausdehnung in y-Richtung (Kacheln)
    pub height: u16,
}

impl TileRect {
    /// Leerer Bereich am Ursprung.
    pub const EMPTY: TileRect = TileRect {
        base: I16Vec2::ZERO,
        width: 0,
        height: 0,
    };

    /// Erstellt ein Rechteck aus Basis und Größe.
    pub const fn new(base: TilePos, width: u16, height: u16) -> Self {
        Self {
            base,
            width,
            height,
        }
    }

    /// Einzelne Kachel als 1×1-Rechteck.
    pub const fn single(pos: TilePos) -> Self {
        Self::new(pos, 1, 1)
    }

    /// Rechteck aus zwei inklusiven Eckpunkten (beliebige Reihenfolge, z.B. Drag-Start/Ende).
    pub fn from_corners(a: TilePos, b: TilePos) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::from_bounds(
            i32::from(min.x),
            i32::from(min.y),
            i32::from(max.x) + 1,
            i32::from(max.y) + 1,
        )
    }

    /// Baut ein Rechteck aus halboffenen i32-Grenzen `[x0, x1) × [y0, y1)`.
    /// Die Größe wird auf den u16-Bereich begrenzt; Redraw-Regionen nutzen daher [`RedrawRegion`].
    fn from_bounds(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        if x1 <= x0 || y1 <= y0 {
            return Self::EMPTY;
        }
        let (Ok(bx), Ok(by)) = (i16::try_from(x0), i16::try_from(y0)) else {
            return Self::EMPTY;
        };
        Self {
            base: I16Vec2::new(bx, by),
            width: u16::try_from(x1 - x0).unwrap_or(u16::MAX),
            height: u16::try_from(y1 - y0).unwrap_or(u16::MAX),
        }
    }

    /// Gibt `true` zurück, wenn der Bereich keine Kachel enthält.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Anzahl der Kacheln im Bereich.
    pub const fn tile_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Halboffene Grenzen als i32: `(x0, y0, x1, y1)`.
    fn bounds(&self) -> (i32, i32, i32, i32) {
        let x0 = i32::from(self.base.x);
        let y0 = i32::from(self.base.y);
        (
            x0,
            y0,
            x0 + i32::from(self.width),
            y0 + i32::from(self.height),
        )
    }

    /// Prüft, ob die Kachel im Bereich liegt.
    pub fn contains(&self, pos: TilePos) -> bool {
        let (x0, y0, x1, y1) = self.bounds();
        let (x, y) = (i32::from(pos.x), i32::from(pos.y));
        x >= x0 && x < x1 && y >= y0 && y < y1
    }

    /// Umschließendes Rechteck beider Bereiche. Leere Bereiche werden ignoriert.
    pub fn union(&self, other: &TileRect) -> TileRect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let (ax0, ay0, ax1, ay1) = self.bounds();
        let (bx0, by0, bx1, by1) = other.bounds();
        Self::from_bounds(ax0.min(bx0), ay0.min(by0), ax1.max(bx1), ay1.max(by1))
    }

    /// Schnittmenge beider Bereiche (leer, wenn sie sich nicht überlappen).
    pub fn intersect(&self, other: &TileRect) -> TileRect {
        let (ax0, ay0, ax1, ay1) = self.bounds();
        let (bx0, by0, bx1, by1) = other.bounds();
        Self::from_bounds(ax0.max(bx0), ay0.max(by0), ax1.min(bx1), ay1.min(by1))
    }

    /// Iteriert alle Kachelpositionen, x-Spalte für x-Spalte.
    ///
    /// Positionen außerhalb des i16-Bereichs (Rand der Welt) werden übersprungen.
    pub fn tiles(&self) -> impl Iterator<Item = TilePos> {
        let (x0, y0, x1, y1) = self.bounds();
        (x0..x1).flat_map(move |x| {
            (y0..y1).filter_map(move |y| {
                let x = i16::try_from(x).ok()?;
                let y = i16::try_from(y).ok()?;
                Some(I16Vec2::new(x, y))
            })
        })
    }
}

/// Neu zu zeichnende Kacheln mit inklusiven i32-Grenzen.
///
/// Kann im Gegensatz zu [`TileRect`] die ganze i16-Welt (65536 Kacheln je Achse) abdecken,
/// sodass das Zusammenfassen weit entfernter Bereiche keine Kacheln verliert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawRegion {
    /// Kleinste enthaltene Kachel
    pub min: IVec2,
    /// Größte enthaltene Kachel
    pub max: IVec2,
}

impl RedrawRegion {
    /// Leere Region; neutrales Element für [`union`](Self::union).
    pub const EMPTY: RedrawRegion = RedrawRegion {
        min: IVec2::MAX,
        max: IVec2::MIN,
    };

    /// Gibt `true` zurück, wenn die Region keine Kachel enthält.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Umschließende Region beider Regionen.
    pub fn union(&self, other: &RedrawRegion) -> RedrawRegion {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Prüft, ob die Kachel in der Region liegt.
    pub fn contains(&self, pos: TilePos) -> bool {
        let pos = pos.as_ivec2();
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }

    /// Anzahl der Kacheln in der Region.
    pub fn tile_count(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let width = i64::from(self.max.x) - i64::from(self.min.x) + 1;
        let height = i64::from(self.max.y) - i64::from(self.min.y) + 1;
        (width * height) as u64
    }

    /// Teil der Region innerhalb eines (z.B. sichtbaren) Rechtecks.
    pub fn clip(&self, rect: &TileRect) -> TileRect {
        if self.is_empty() {
            return TileRect::EMPTY;
        }
        let (x0, y0, x1, y1) = rect.bounds();
        TileRect::from_bounds(
            x0.max(self.min.x),
            y0.max(self.min.y),
            x1.min(self.max.x + 1),
            y1.min(self.max.y + 1),
        )
    }
}

impl Default for RedrawRegion {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<TileRect> for RedrawRegion {
    fn from(rect: TileRect) -> Self {
        if rect.is_empty() {
            return Self::EMPTY;
        }
        let (x0, y0, x1, y1) = rect.bounds();
        Self {
            min: IVec2::new(x0, y0),
            max: IVec2::new(x1 - 1, y1 - 1),
        }
    }
}
