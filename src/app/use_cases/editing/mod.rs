//! Use-Case-Funktionen für das Kurven-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `curve_points`: Anker anhängen, löschen, Kurve leeren
//! - `drag`: Punkt ziehen mit magnetischem Einrasten und Schleifenschluss

mod curve_points;
mod drag;

pub use curve_points::{append_point, clear_curve, delete_point, set_edit_mode};
pub use drag::{begin_drag, cancel_drag, end_drag, update_drag};
