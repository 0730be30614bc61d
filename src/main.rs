//! Fourier-Epizykel-Editor (headless).
//!
//! Lädt eine Zeichnung (oder den eingebauten Kreis), zerlegt sie in eine
//! Fourier-Reihe und spielt eine feste Anzahl Frames ab.
//!
//! Aufruf: `fourier-epicycles [zeichnung.json] [frames] [spur.json]`

use anyhow::Context;
use fourier_epicycles::{AppController, AppIntent, AppState, EditorOptions};

/// Frame-Delta der Wiedergabe (60 Hz).
const FRAME_DELTA: f64 = 1.0 / 60.0;
/// Standard-Anzahl abgespielter Frames.
const DEFAULT_FRAMES: usize = 600;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Fourier-Epizykel-Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = AppRunner::run(std::env::args().skip(1).collect()) {
        log::error!("Abbruch: {:#}", e);
        std::process::exit(1);
    }
}

struct AppRunner;

impl AppRunner {
    fn run(args: Vec<String>) -> anyhow::Result<()> {
        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        let drawing = args.first().cloned();
        let frames = match args.get(1) {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("Ungültige Frame-Anzahl '{}'", raw))?,
            None => DEFAULT_FRAMES,
        };
        let trace_path = args.get(2).cloned();

        let load_intent = match drawing {
            Some(path) => AppIntent::DrawingFileSelected { path },
            None => AppIntent::PremadeDrawingRequested,
        };
        controller.handle_intent(&mut state, load_intent)?;
        controller.handle_intent(&mut state, AppIntent::FinishDrawingRequested)?;

        if let Some(warning) = state.last_warning {
            log::warn!("Koeffizienten mit Hinweis berechnet: {:?}", warning);
        }

        for _ in 0..frames {
            controller.handle_intent(&mut state, AppIntent::FrameTick { delta: FRAME_DELTA })?;
        }

        let scene = controller.build_render_scene(&state);
        println!("Zeichnung:   {}", state.drawing.name);
        println!("Punkte:      {}", state.point_count());
        println!("Zeiger:      {}", state.phasor_count());
        println!("Frames:      {}", frames);
        println!("Fortschritt: {:.4}", scene.progress);
        println!("Spur:        {} Punkte", scene.trace.len());
        if let Some(tip) = scene.tip() {
            println!("Spitze:      {}", tip);
        }

        if let Some(path) = trace_path {
            let trace: Vec<[f64; 2]> = scene.trace.iter().map(|p| p.to_array()).collect();
            let json = serde_json::to_string_pretty(&trace)?;
            std::fs::write(&path, json)
                .with_context(|| format!("Spur konnte nicht nach '{}' geschrieben werden", path))?;
            log::info!("Spur gespeichert nach: {}", path);
        }

        Ok(())
    }
}
