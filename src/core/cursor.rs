//! Cursor-Typen und Kachel-Richtungen für die Viewport-Hervorhebung.

use glam::I16Vec2;

/// Ecke einer Kachel (Kompassrichtung).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCorner {
    /// Nord-Ecke
    North,
    /// Ost-Ecke
    East,
    /// Süd-Ecke
    South,
    /// West-Ecke
    West,
}

/// Kante einer Kachel (Richtung zur Nachbarkachel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileEdge {
    /// Nordost-Kante (Nachbar bei x − 1)
    #[default]
    NorthEast,
    /// Südost-Kante (Nachbar bei y + 1)
    SouthEast,
    /// Südwest-Kante (Nachbar bei x + 1)
    SouthWest,
    /// Nordwest-Kante (Nachbar bei y − 1)
    NorthWest,
}

impl TileEdge {
    /// Alle Kanten im Uhrzeigersinn, beginnend bei Nordost.
    pub const ALL: [TileEdge; 4] = [
        TileEdge::NorthEast,
        TileEdge::SouthEast,
        TileEdge::SouthWest,
        TileEdge::NorthWest,
    ];

    /// Versatz zur Nachbarkachel hinter dieser Kante.
    pub const fn delta(self) -> I16Vec2 {
        match self {
            TileEdge::NorthEast => I16Vec2::new(-1, 0),
            TileEdge::SouthEast => I16Vec2::new(0, 1),
            TileEdge::SouthWest => I16Vec2::new(1, 0),
            TileEdge::NorthWest => I16Vec2::new(0, -1),
        }
    }

    /// Nächste Kante im Uhrzeigersinn.
    pub const fn rotate_cw(self) -> TileEdge {
        match self {
            TileEdge::NorthEast => TileEdge::SouthEast,
            TileEdge::SouthEast => TileEdge::SouthWest,
            TileEdge::SouthWest => TileEdge::NorthWest,
            TileEdge::NorthWest => TileEdge::NorthEast,
        }
    }
}

/// Glyphe, die der Viewport an einer Voxel-Position zeichnet.
///
/// Die Rohwerte sind stabil; `Invalid` (0xFF) bedeutet "nichts zusätzlich zeichnen".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CursorType {
    /// Nord-Ecke hervorheben
    North = 0,
    /// Ost-Ecke hervorheben
    East = 1,
    /// Süd-Ecke hervorheben
    South = 2,
    /// West-Ecke hervorheben
    West = 3,
    /// Ganze Kachel hervorheben
    Tile = 4,
    /// Bau-Pfeil Richtung Nordost
    ArrowNe = 5,
    /// Bau-Pfeil Richtung Südost
    ArrowSe = 6,
    /// Bau-Pfeil Richtung Südwest
    ArrowSw = 7,
    /// Bau-Pfeil Richtung Nordwest
    ArrowNw = 8,
    /// Nordost-Kante hervorheben
    EdgeNe = 9,
    /// Südost-Kante hervorheben
    EdgeSe = 10,
    /// Südwest-Kante hervorheben
    EdgeSw = 11,
    /// Nordwest-Kante hervorheben
    EdgeNw = 12,
    /// Kein Cursor
    #[default]
    Invalid = 0xFF,
}

impl CursorType {
    /// Eck-Hervorhebung für die gegebene Ecke.
    pub const fn corner(corner: TileCorner) -> Self {
        match corner {
            TileCorner::North => CursorType::North,
            TileCorner::East => CursorType::East,
            TileCorner::South => CursorType::South,
            TileCorner::West => CursorType::West,
        }
    }

    /// Bau-Pfeil in die gegebene Richtung.
    pub const fn arrow(edge: TileEdge) -> Self {
        match edge {
            TileEdge::NorthEast => CursorType::ArrowNe,
            TileEdge::SouthEast => CursorType::ArrowSe,
            TileEdge::SouthWest => CursorType::ArrowSw,
            TileEdge::NorthWest => CursorType::ArrowNw,
        }
    }

    /// Kanten-Hervorhebung für die gegebene Kante.
    pub const fn edge(edge: TileEdge) -> Self {
        match edge {
            TileEdge::NorthEast => CursorType::EdgeNe,
            TileEdge::SouthEast => CursorType::EdgeSe,
            TileEdge::SouthWest => CursorType::EdgeSw,
            TileEdge::NorthWest => CursorType::EdgeNw,
        }
    }

    /// Gibt `true` zurück für jede echte Glyphe (alles außer `Invalid`).
    #[inline]
    pub const fn is_valid(self) -> bool {
        !matches!(self, CursorType::Invalid)
    }

    /// Stabiler Rohwert (z.B. als Sprite-Index).
    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Umkehrung von [`CursorType::raw`]. Unbekannte Werte ergeben `Invalid`.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => CursorType::North,
            1 => CursorType::East,
            2 => CursorType::South,
            3 => CursorType::West,
            4 => CursorType::Tile,
            5 => CursorType::ArrowNe,
            6 => CursorType::ArrowSe,
            7 => CursorType::ArrowSw,
            8 => CursorType::ArrowNw,
            9 => CursorType::EdgeNe,
            10 => CursorType::EdgeSe,
            11 => CursorType::EdgeSw,
            12 => CursorType::EdgeNw,
            _ => CursorType::Invalid,
        }
    }

    /// Richtung von Pfeil- und Kanten-Cursorn, sonst `None`.
    pub const fn edge_direction(self) -> Option<TileEdge> {
        match self {
            CursorType::ArrowNe | CursorType::EdgeNe => Some(TileEdge::NorthEast),
            CursorType::ArrowSe | CursorType::EdgeSe => Some(TileEdge::SouthEast),
            CursorType::ArrowSw | CursorType::EdgeSw => Some(TileEdge::SouthWest),
            CursorType::ArrowNw | CursorType::EdgeNw => Some(TileEdge::NorthWest),
            _ => None,
        }
    }
}
