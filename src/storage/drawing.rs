//! Parser und Writer für `DrawingRecord` (JSON).

use crate::core::BezierCurve;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persistierte Zeichnung
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingRecord {
    pub width: f64,
    pub height: f64,
    pub name: String,
    /// Flache Punktliste in Speicherreihenfolge der Kette
    pub points: Vec<[f64; 2]>,
    pub key: String,
}

impl DrawingRecord {
    /// Erstellt einen Datensatz aus einer Kurve.
    ///
    /// Ohne vorhandenen Schlüssel wird eine neue UUID (v4) vergeben.
    pub fn from_curve(
        curve: &BezierCurve,
        name: &str,
        key: Option<&str>,
        canvas_size: [f64; 2],
    ) -> Self {
        Self {
            width: canvas_size[0],
            height: canvas_size[1],
            name: name.to_string(),
            points: curve.to_flat(),
            key: key.map_or_else(generate_drawing_key, str::to_string),
        }
    }

    /// Baut die Kurve; Steuerpunkt-Flags ergeben sich aus den Indizes.
    pub fn to_curve(&self) -> BezierCurve {
        BezierCurve::from_flat(&self.points)
    }
}

/// Liest eine Zeichnung aus einem JSON-String.
pub fn parse_drawing(json: &str) -> Result<DrawingRecord> {
    let record: DrawingRecord =
        serde_json::from_str(json).context("Zeichnung ist kein gültiges JSON")?;

    if let Some(i) = record
        .points
        .iter()
        .position(|p| !p[0].is_finite() || !p[1].is_finite())
    {
        anyhow::bail!("Punkt {} der Zeichnung '{}' ist nicht endlich", i, record.name);
    }

    log::info!(
        "Zeichnung '{}' gelesen: {} Punkte ({}x{})",
        record.name,
        record.points.len(),
        record.width,
        record.height
    );
    Ok(record)
}

/// Schreibt eine Zeichnung als eingerücktes JSON.
pub fn write_drawing(record: &DrawingRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("Zeichnung konnte nicht serialisiert werden")
}

fn generate_drawing_key() -> String {
    Uuid::new_v4().to_string()
}
