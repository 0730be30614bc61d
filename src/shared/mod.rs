//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Frontend geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{PICK_RADIUS, SNAP_RADIUS};
pub use render_scene::{RenderScene, ScenePoint, SessionMode};
