//! Fourier-Epizykel-Editor Library.
//! Kurven-Editing, Fourier-Zerlegung und Wiedergabe als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod storage;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditMode, PlaybackState, Reconstruction,
};
pub use core::{
    phasor_chain, phasor_sum, BezierCurve, Complex, ComplexFunction, CoreError, CurvePoint,
    ExtractionWarning, FrequencyRange, Phasor, Vector2,
};
pub use shared::{EditorOptions, RenderScene, SessionMode};
pub use storage::{parse_drawing, write_drawing, DrawingRecord};
