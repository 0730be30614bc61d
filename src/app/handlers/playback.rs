//! Handler für Wiedergabe und Moduswechsel.

use crate::app::use_cases;
use crate::app::AppState;

pub fn tick(state: &mut AppState, delta: f64) {
    use_cases::playback::tick(state, delta);
}

pub fn play(state: &mut AppState) {
    use_cases::playback::play(state);
}

pub fn pause(state: &mut AppState) {
    use_cases::playback::pause(state);
}

pub fn toggle(state: &mut AppState) {
    use_cases::playback::toggle(state);
}

pub fn scrub(state: &mut AppState, progress: f64) {
    use_cases::playback::scrub(state, progress);
}

pub fn set_speed(state: &mut AppState, speed: f64) {
    use_cases::playback::set_speed(state, speed);
}

pub fn enter_simulation(state: &mut AppState) {
    use_cases::playback::enter_simulation(state);
}

pub fn enter_drawing(state: &mut AppState) {
    use_cases::playback::enter_drawing(state);
}
