//! JSON-Import/Export gespeicherter Zeichnungen.
//!
//! Eine Zeichnung ist die flache Punktliste der Bézier-Kette plus Name,
//! Größe der Zeichenfläche und Speicherschlüssel.

pub mod drawing;
pub mod premade;

pub use drawing::{parse_drawing, write_drawing, DrawingRecord};
