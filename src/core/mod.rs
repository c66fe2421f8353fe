//! Core-Domänentypen: Kachel-Geometrie, Cursor-Glyphen, Viewport-Kamera.

pub mod camera;
pub mod cursor;
pub mod geometry;

pub use camera::ViewportCamera;
pub use cursor::{CursorType, TileCorner, TileEdge};
pub use geometry::{RedrawRegion, TilePos, TileRect, VoxelPos};
