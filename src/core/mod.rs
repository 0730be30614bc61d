//! Core-Domänentypen: Vektoren, komplexe Zahlen, Bézier-Kette, Fourier-Zerlegung.

pub mod bezier_curve;
pub mod complex;
pub mod complex_function;
pub mod curve_point;
pub mod error;
pub mod phasor;
/// Segment-Adressierung und Abtastung kubischer Bézier-Segmente
pub mod segment;
pub mod vector;

pub use bezier_curve::{BezierCurve, DEFAULT_HANDLE_DISTANCE};
pub use complex::Complex;
pub use complex_function::{ComplexFunction, FrequencyRange};
pub use curve_point::CurvePoint;
pub use error::{CoreError, ExtractionWarning};
pub use phasor::{phasor_chain, phasor_sum, Phasor};
pub use segment::{cubic_point, flatten, sample_segment, segment_at, segment_count};
pub use vector::Vector2;
