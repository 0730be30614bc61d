//! Handler für Kurven-Editing und Funktionsaufbau.

use crate::app::state::EditMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{FrequencyRange, Vector2};

pub fn append_point(state: &mut AppState, pos: Vector2) {
    use_cases::editing::append_point(state, pos);
}

pub fn delete_point(state: &mut AppState, index: usize) {
    use_cases::editing::delete_point(state, index);
}

pub fn begin_drag(state: &mut AppState, index: usize) {
    use_cases::editing::begin_drag(state, index);
}

pub fn update_drag(state: &mut AppState, pos: Vector2) {
    use_cases::editing::update_drag(state, pos);
}

pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

pub fn cancel_drag(state: &mut AppState) {
    use_cases::editing::cancel_drag(state);
}

pub fn set_edit_mode(state: &mut AppState, mode: EditMode) {
    use_cases::editing::set_edit_mode(state, mode);
}

pub fn clear_curve(state: &mut AppState) {
    use_cases::editing::clear_curve(state);
}

/// Baut die Funktion aus der aktuellen Kurve.
pub fn build_function(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::fourier::build_function(state)
}

/// Setzt die Zeiger-Anzahl und berechnet die Zeiger neu.
pub fn set_vector_count(state: &mut AppState, count: u32) -> anyhow::Result<()> {
    use_cases::fourier::set_vector_count(state, count)
}

pub fn set_frequency_range(state: &mut AppState, range: FrequencyRange) -> anyhow::Result<()> {
    use_cases::fourier::set_frequency_range(state, range)
}
