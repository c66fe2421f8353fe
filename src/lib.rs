//! Kachel-Selektoren für Voxel-Viewports.
//! Kachel-Indizierung, Mausmodus-Strategien und Cursor-Abfragen als Library.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    build_cursor_scene, AreaSelector, ArrowSelector, FootprintSelector, MouseModeSelector,
    PointSelector, SelectorHost, TileAreaSelector, TileData, INVALID_TILE_INDEX,
};
pub use core::{
    CursorType, RedrawRegion, TileCorner, TileEdge, TilePos, TileRect, ViewportCamera, VoxelPos,
};
pub use shared::{CursorScene, CursorSprite, SelectorOptions};
