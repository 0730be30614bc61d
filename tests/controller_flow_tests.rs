use fourier_epicycles::app::{use_cases, MAX_SCRUB_TRACE_POINTS};
use fourier_epicycles::{
    AppCommand, AppController, AppIntent, AppState, EditorOptions, ExtractionWarning,
    FrequencyRange, SessionMode, Vector2,
};

/// Optionen mit grober Abtastung, damit die Tests schnell bleiben.
fn fast_options() -> EditorOptions {
    EditorOptions {
        curve_sampling_precision: 0.005,
        integration_precision: 0.005,
        function_drawing_precision: 0.01,
        vector_count: 20,
        ..EditorOptions::default()
    }
}

fn simulating_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::with_options(fast_options());
    controller
        .handle_intent(&mut state, AppIntent::PremadeDrawingRequested)
        .expect("Beispiel-Zeichnung sollte laden");
    controller
        .handle_intent(&mut state, AppIntent::FinishDrawingRequested)
        .expect("Zeichnung übernehmen sollte ohne Fehler durchlaufen");
    state
}

#[test]
fn test_zeichnung_uebernehmen_startet_wiedergabe() {
    let mut controller = AppController::new();
    let state = simulating_state(&mut controller);

    assert_eq!(state.mode, SessionMode::Simulation);
    assert!(state.playback.is_running());
    assert_eq!(state.phasor_count(), 21);
    assert_eq!(state.last_warning, None);

    let phasors = state.function.as_ref().unwrap().phasors();
    let frequencies: Vec<i32> = phasors.iter().map(|p| p.frequency).collect();
    assert_eq!(frequencies.first(), Some(&-10));
    assert_eq!(frequencies.last(), Some(&10));
    assert!(frequencies.windows(2).all(|w| w[0] < w[1]));

    match state.command_log.last() {
        Some(AppCommand::Play) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_frames_verlaengern_spur() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);

    for _ in 0..10 {
        controller
            .handle_intent(&mut state, AppIntent::FrameTick { delta: 1.0 / 60.0 })
            .unwrap();
    }

    assert_eq!(state.playback.trace().len(), 10);
    assert!((state.playback.progress() - 10.0 * 0.1 / 60.0).abs() < 1e-12);
    // Ticks werden nicht protokolliert
    assert!(!state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::Tick { .. })));
}

#[test]
fn test_frame_delta_wird_begrenzt() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::FrameTick { delta: 5.0 })
        .unwrap();

    let expected = state.options.max_frame_delta * state.options.animation_speed;
    assert!((state.playback.progress() - expected).abs() < 1e-12);
}

#[test]
fn test_rekonstruktion_folgt_kreis() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::ProgressScrubbed { progress: 0.25 })
        .unwrap();

    assert!(!state.playback.is_running());
    let tip = state.playback.tip().unwrap();
    // Kreis um die Mitte der Zeichenfläche, Viertelumlauf → unten (y wächst)
    let [w, h] = state.options.canvas_size;
    let radius = w.min(h) * 0.3;
    let expected = Vector2::new(w / 2.0, h / 2.0 + radius);
    assert!(
        tip.distance(expected) < 5.0,
        "Spitze {} weit weg von {}",
        tip,
        expected
    );
}

#[test]
fn test_scrub_bei_kleiner_geschwindigkeit_bleibt_begrenzt() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::SpeedChanged { speed: 1e-6 })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ProgressScrubbed { progress: 0.9 })
        .unwrap();

    let n = state.playback.trace().len();
    assert!(n <= MAX_SCRUB_TRACE_POINTS, "Spurlänge {}", n);
    assert!(n > MAX_SCRUB_TRACE_POINTS / 2, "Spurlänge {}", n);
    assert_eq!(state.playback.progress(), 0.9);
}

#[test]
fn test_zeigeranzahl_wird_begrenzt_und_neu_berechnet() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::VectorCountChanged { count: 5 })
        .unwrap();
    assert_eq!(state.phasor_count(), 6);

    state.options.max_vector_count = 8;
    controller
        .handle_intent(&mut state, AppIntent::VectorCountChanged { count: 1000 })
        .unwrap();
    assert_eq!(state.vector_count, 8);
    assert_eq!(state.phasor_count(), 9);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FrequencyRangeChanged {
                range: FrequencyRange::new(2, 1),
            },
        )
        .unwrap();
    assert_eq!(state.phasor_count(), 0);
}

#[test]
fn test_frequenzbereich_bleibt_ueber_neuberechnungen_erhalten() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(fast_options());
    controller
        .handle_intent(&mut state, AppIntent::PremadeDrawingRequested)
        .unwrap();

    // Bereich vor der ersten Berechnung wählen
    controller
        .handle_intent(
            &mut state,
            AppIntent::FrequencyRangeChanged {
                range: FrequencyRange::new(-3, 3),
            },
        )
        .unwrap();
    assert_eq!(state.frequency_range, FrequencyRange::new(-3, 3));
    controller
        .handle_intent(&mut state, AppIntent::FinishDrawingRequested)
        .unwrap();
    assert_eq!(state.phasor_count(), 7);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FrequencyRangeChanged {
                range: FrequencyRange::new(-2, 2),
            },
        )
        .unwrap();
    assert_eq!(state.phasor_count(), 5);

    controller
        .handle_intent(&mut state, AppIntent::BackToDrawingRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::FinishDrawingRequested)
        .unwrap();
    assert_eq!(state.phasor_count(), 5);
    let frequencies: Vec<i32> = state
        .function
        .as_ref()
        .unwrap()
        .phasors()
        .iter()
        .map(|p| p.frequency)
        .collect();
    assert_eq!(frequencies, vec![-2, -1, 0, 1, 2]);

    // Zeiger-Anzahl überschreibt den Bereich wieder
    controller
        .handle_intent(&mut state, AppIntent::VectorCountChanged { count: 4 })
        .unwrap();
    assert_eq!(state.frequency_range, FrequencyRange::new(-2, 2));
    controller
        .handle_intent(&mut state, AppIntent::VectorCountChanged { count: 6 })
        .unwrap();
    assert_eq!(state.frequency_range, FrequencyRange::new(-3, 3));
    assert_eq!(state.phasor_count(), 7);
}

#[test]
fn test_zurueck_zum_zeichnen_verwirft_funktion() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::BackToDrawingRequested)
        .unwrap();

    assert_eq!(state.mode, SessionMode::Drawing);
    assert!(state.function.is_none());
    assert!(!state.playback.is_running());
    assert!(state.playback.trace().is_empty());
    // Kurve bleibt erhalten
    assert_eq!(state.curve.len(), 13);
}

#[test]
fn test_leere_kurve_kann_nicht_uebernommen_werden() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(fast_options());

    let err = controller
        .handle_intent(&mut state, AppIntent::FinishDrawingRequested)
        .expect_err("Leere Kurve darf keine Funktion ergeben");

    assert!(format!("{:#}", err).contains("Segment"));
    assert_eq!(state.mode, SessionMode::Drawing);
    assert!(state.function.is_none());
    assert_eq!(state.command_log.last(), Some(&AppCommand::BuildFunction));
}

#[test]
fn test_offene_kurve_liefert_warnung() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(fast_options());
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::CanvasPressed {
                    pos: Vector2::new(x, y),
                },
            )
            .unwrap();
    }

    controller
        .handle_intent(&mut state, AppIntent::FinishDrawingRequested)
        .unwrap();

    assert_eq!(state.mode, SessionMode::Simulation);
    assert_eq!(state.last_warning, Some(ExtractionWarning::NonClosedCurve));
}

#[test]
fn test_klicks_waehrend_wiedergabe_werden_ignoriert() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);
    let before = state.curve.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos: Vector2::new(10.0, 10.0),
            },
        )
        .unwrap();

    assert_eq!(state.curve, before);
}

#[test]
fn test_toggle_und_geschwindigkeit() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::TogglePlaybackRequested)
        .unwrap();
    assert!(!state.playback.is_running());

    controller
        .handle_intent(&mut state, AppIntent::SpeedChanged { speed: 0.5 })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::PlayRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::FrameTick { delta: 0.02 })
        .unwrap();
    assert!((state.playback.progress() - 0.01).abs() < 1e-12);

    controller
        .handle_intent(&mut state, AppIntent::PauseRequested)
        .unwrap();
    assert!(!state.playback.is_running());
}

#[test]
fn test_optionen_berechnen_funktion_neu() {
    let mut controller = AppController::new();
    let mut state = simulating_state(&mut controller);
    let samples_before = state.function.as_ref().unwrap().len();

    // Nur Zeiger-Anzahl: gleiche Stützstellen, neuer Bereich
    let options = EditorOptions {
        vector_count: 6,
        ..state.options.clone()
    };
    use_cases::options::apply_options(&mut state, options).unwrap();
    assert_eq!(state.vector_count, 6);
    assert_eq!(state.frequency_range, FrequencyRange::new(-3, 3));
    assert_eq!(state.phasor_count(), 7);
    assert_eq!(state.function.as_ref().unwrap().len(), samples_before);
    assert!(state.playback.is_running());

    // Gröbere Abtastung: Funktion wird neu gebaut, Bereich bleibt
    let options = EditorOptions {
        curve_sampling_precision: 0.01,
        ..state.options.clone()
    };
    use_cases::options::apply_options(&mut state, options).unwrap();
    let function = state.function.as_ref().unwrap();
    assert!(function.len() < samples_before);
    assert_eq!(function.phasors().len(), 7);
    assert_eq!(state.mode, SessionMode::Simulation);
    assert!(state.playback.is_running());

    // Niedrigere Obergrenze begrenzt die aktuelle Anzahl
    let options = EditorOptions {
        max_vector_count: 4,
        ..state.options.clone()
    };
    use_cases::options::apply_options(&mut state, options).unwrap();
    assert_eq!(state.vector_count, 4);
    assert_eq!(state.phasor_count(), 5);
}

