//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::DrawingMeta;
use crate::app::AppState;
use crate::core::Vector2;
use crate::storage::{self, premade, DrawingRecord};
use anyhow::Context;

/// Radius der Beispiel-Zeichnung relativ zur kürzeren Kante der Zeichenfläche.
const PREMADE_RADIUS_FACTOR: f64 = 0.3;

/// Lädt eine Zeichnung aus einer JSON-Datei und wechselt in den Zeichenmodus.
pub fn load_drawing(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Zeichnung '{}' konnte nicht gelesen werden", path))?;
    let record = storage::parse_drawing(&content)?;
    apply_record(state, &record);
    log::info!("Zeichnung geladen aus: {}", path);
    Ok(())
}

/// Übernimmt einen gelesenen Datensatz in den AppState.
pub fn apply_record(state: &mut AppState, record: &DrawingRecord) {
    super::playback::enter_drawing(state);
    state.curve = record.to_curve();
    state.editor.drag = None;
    state.options.canvas_size = [record.width, record.height];
    state.drawing = DrawingMeta {
        name: record.name.clone(),
        key: Some(record.key.clone()),
    };
}

/// Speichert die aktuelle Kurve als JSON-Datei.
pub fn save_drawing(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let record = DrawingRecord::from_curve(
        &state.curve,
        &state.drawing.name,
        state.drawing.key.as_deref(),
        state.options.canvas_size,
    );
    let json = storage::write_drawing(&record)?;
    std::fs::write(path, json)
        .with_context(|| format!("Zeichnung konnte nicht nach '{}' geschrieben werden", path))?;

    state.drawing.key = Some(record.key);
    log::info!(
        "Zeichnung '{}' gespeichert nach: {} ({} Punkte)",
        state.drawing.name,
        path,
        state.curve.len()
    );
    Ok(())
}

/// Lädt den eingebauten Kreis, zentriert auf der Zeichenfläche.
pub fn load_premade(state: &mut AppState) {
    let [width, height] = state.options.canvas_size;
    let center = Vector2::new(width / 2.0, height / 2.0);
    let radius = width.min(height) * PREMADE_RADIUS_FACTOR;

    super::playback::enter_drawing(state);
    state.curve = premade::circle(center, radius);
    state.drawing = DrawingMeta {
        name: "Kreis".to_string(),
        key: None,
    };
    log::info!("Beispiel-Zeichnung 'Kreis' geladen");
}

pub fn rename_drawing(state: &mut AppState, name: String) {
    log::info!("Zeichnung umbenannt: '{}' → '{}'", state.drawing.name, name);
    state.drawing.name = name;
}
