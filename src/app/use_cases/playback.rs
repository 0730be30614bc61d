//! Use-Cases für Wiedergabe und Sitzungswechsel.

use crate::app::AppState;
use crate::shared::SessionMode;

/// Ein Frame der Wiedergabe; das Delta wird auf `max_frame_delta` begrenzt.
pub fn tick(state: &mut AppState, delta: f64) {
    if !state.is_simulating() {
        return;
    }
    let delta = delta.clamp(0.0, state.options.max_frame_delta);
    let phasors = state.function.as_deref().map_or(&[][..], |f| f.phasors());
    state.playback.tick(delta, phasors);
}

pub fn play(state: &mut AppState) {
    state.playback.play();
}

pub fn pause(state: &mut AppState) {
    state.playback.pause();
}

pub fn toggle(state: &mut AppState) {
    state.playback.toggle();
    log::info!("Wiedergabe: {:?}", state.playback.state());
}

/// Springt zu einem Fortschritt und baut die Spur neu auf.
pub fn scrub(state: &mut AppState, progress: f64) {
    let phasors = state.function.as_deref().map_or(&[][..], |f| f.phasors());
    state.playback.scrub(progress, phasors);
}

pub fn set_speed(state: &mut AppState, speed: f64) {
    state.playback.set_speed(speed);
    log::info!("Geschwindigkeit: {}", state.playback.speed());
}

/// Wechselt zur Wiedergabe; ohne berechnete Funktion bleibt der Modus.
pub fn enter_simulation(state: &mut AppState) {
    if state.function.is_none() {
        log::warn!("Wiedergabe nicht möglich: keine Funktion berechnet");
        return;
    }
    state.editor.drag = None;
    state.curve.deselect_all();
    state.playback.reset();
    state.mode = SessionMode::Simulation;
    log::info!("Modus: Wiedergabe ({} Zeiger)", state.phasor_count());
}

/// Zurück zum Zeichnen; die Funktion wird verworfen.
pub fn enter_drawing(state: &mut AppState) {
    state.playback.reset();
    state.function = None;
    state.last_warning = None;
    state.mode = SessionMode::Drawing;
    log::info!("Modus: Zeichnen");
}
