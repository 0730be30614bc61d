//! Use-Case: Laufzeit-Optionen übernehmen.

use crate::app::AppState;
use crate::core::FrequencyRange;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen in den AppState.
///
/// Geänderte Abtastung baut eine vorhandene Funktion neu, geänderte
/// Integrations-Schrittweite oder Zeiger-Anzahl berechnet die Zeiger neu.
/// Eine laufende Wiedergabe läuft danach weiter.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    let previous = std::mem::replace(&mut state.options, options);
    state.playback.set_speed(state.options.animation_speed);

    let requested = if state.options.vector_count != previous.vector_count {
        state.options.vector_count
    } else {
        state.vector_count
    };
    let count = state.options.clamped_vector_count(requested);
    let count_changed = count != state.vector_count;
    if count_changed {
        state.vector_count = count;
        state.frequency_range = FrequencyRange::from_vector_count(count);
    }

    if state.function.is_none() {
        return Ok(());
    }

    let resample = state.options.curve_sampling_precision != previous.curve_sampling_precision;
    let reintegrate = state.options.integration_precision != previous.integration_precision;
    if !(resample || reintegrate || count_changed) {
        return Ok(());
    }

    let was_running = state.playback.is_running();
    if resample {
        super::fourier::build_function(state)?;
    }
    super::fourier::recompute_phasors(state)?;
    if was_running {
        state.playback.play();
    }
    log::info!(
        "Funktion nach Options-Änderung aktualisiert ({} Zeiger)",
        state.phasor_count()
    );
    Ok(())
}
