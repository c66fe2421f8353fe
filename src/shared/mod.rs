//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod cursor_scene;
pub mod options;

pub use cursor_scene::{CursorScene, CursorSprite};
pub use options::SelectorOptions;
