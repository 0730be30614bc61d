//! Use-Cases für Funktionsaufbau und Koeffizienten-Berechnung.

use crate::app::AppState;
use crate::core::{ComplexFunction, CoreError, FrequencyRange};
use anyhow::Context;
use std::sync::Arc;

/// Baut die Funktion aus der aktuellen Kurve (noch ohne Zeiger).
///
/// Ersetzt eine vorhandene Funktion und setzt die Wiedergabe zurück.
pub fn build_function(state: &mut AppState) -> anyhow::Result<()> {
    let function =
        ComplexFunction::from_curve(&state.curve, state.options.curve_sampling_precision);
    if function.is_empty() {
        return Err(CoreError::EmptyFunction)
            .context("Kurve enthält kein vollständiges Bézier-Segment");
    }

    log::info!(
        "Funktion aus {} Segmenten gebaut ({} Stützstellen, geschlossen: {})",
        state.curve.segment_count(),
        function.len(),
        function.is_closed()
    );
    state.function = Some(Arc::new(function));
    state.last_warning = None;
    state.playback.reset();
    Ok(())
}

/// Setzt die Zeiger-Anzahl (begrenzt) und berechnet die Zeiger neu.
pub fn set_vector_count(state: &mut AppState, count: u32) -> anyhow::Result<()> {
    let clamped = state.options.clamped_vector_count(count);
    if clamped != count {
        log::warn!(
            "Zeiger-Anzahl {} auf Maximum {} begrenzt",
            count,
            state.options.max_vector_count
        );
    }
    state.vector_count = clamped;
    set_frequency_range(state, FrequencyRange::from_vector_count(clamped))
}

/// Merkt sich `range`, berechnet die Zeiger dafür und tauscht die Funktion aus.
///
/// Ohne Funktion wird nur der Bereich gemerkt. Eine offene Kurve wird
/// berechnet, die Warnung landet in `state.last_warning`.
pub fn set_frequency_range(state: &mut AppState, range: FrequencyRange) -> anyhow::Result<()> {
    state.frequency_range = range;
    recompute_phasors(state)
}

/// Berechnet die Zeiger für den gemerkten Frequenzbereich neu.
pub fn recompute_phasors(state: &mut AppState) -> anyhow::Result<()> {
    let range = state.frequency_range;
    let Some(current) = state.function.as_ref() else {
        log::debug!("Frequenzbereich gemerkt, noch keine Funktion berechnet");
        return Ok(());
    };

    let (next, warning) = current
        .with_phasors(range, state.options.integration_precision)
        .context("Koeffizienten-Berechnung fehlgeschlagen")?;

    log::info!(
        "{} Zeiger für Frequenzen {}..={} berechnet",
        next.phasors().len(),
        range.from,
        range.to
    );
    state.function = Some(Arc::new(next));
    state.last_warning = warning;
    state.playback.clear_trace();
    Ok(())
}
