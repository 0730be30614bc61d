//! Application State, zentrale Datenhaltung.

mod app_state;
mod editor;
mod playback;

pub use app_state::{AppState, DrawingMeta};
pub use editor::{DragState, EditMode, EditorState};
pub use playback::{PlaybackState, Reconstruction, MAX_SCRUB_TRACE_POINTS};
