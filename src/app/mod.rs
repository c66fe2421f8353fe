//! Application-Layer: Mausmodus-Selektoren, Host und Cursor-Szene.

pub mod cursor_scene;
pub mod modes;

pub use cursor_scene::build as build_cursor_scene;
pub use modes::{
    AreaSelector, ArrowSelector, FootprintSelector, MouseModeSelector, PointSelector,
    SelectorHost, TileAreaSelector, TileData, INVALID_TILE_INDEX,
};
