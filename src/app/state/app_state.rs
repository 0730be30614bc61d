use crate::app::CommandLog;
use crate::core::{BezierCurve, ComplexFunction, ExtractionWarning, FrequencyRange};
use crate::shared::{EditorOptions, SessionMode};
use std::sync::Arc;

use super::{EditorState, Reconstruction};

/// Name und Speicherschlüssel der aktuellen Zeichnung
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingMeta {
    pub name: String,
    /// Schlüssel im Speicher-Backend (None = noch nie gespeichert)
    pub key: Option<String>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die bearbeitete Bézier-Kette
    pub curve: BezierCurve,
    /// Aktuelle Funktion samt Zeigern (None = noch nicht berechnet)
    pub function: Option<Arc<ComplexFunction>>,
    /// Warnung der letzten Koeffizienten-Berechnung
    pub last_warning: Option<ExtractionWarning>,
    /// Zeichnen oder Abspielen
    pub mode: SessionMode,
    /// Editor-State
    pub editor: EditorState,
    /// Wiedergabe-Zustand
    pub playback: Reconstruction,
    /// Aktuelle Zeiger-Anzahl
    pub vector_count: u32,
    /// Gewählter Frequenzbereich, gilt auch für spätere Neuberechnungen
    pub frequency_range: FrequencyRange,
    /// Metadaten der Zeichnung
    pub drawing: DrawingMeta,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let vector_count = options.clamped_vector_count(options.vector_count);
        Self {
            curve: BezierCurve::new(),
            function: None,
            last_warning: None,
            mode: SessionMode::Drawing,
            editor: EditorState::new(),
            playback: Reconstruction::new(options.animation_speed),
            vector_count,
            frequency_range: FrequencyRange::from_vector_count(vector_count),
            drawing: DrawingMeta::default(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Anzahl der Kurvenpunkte (für Statusanzeigen)
    pub fn point_count(&self) -> usize {
        self.curve.len()
    }

    /// Anzahl der aktuellen Zeiger
    pub fn phasor_count(&self) -> usize {
        self.function.as_ref().map_or(0, |f| f.phasors().len())
    }

    pub fn is_simulating(&self) -> bool {
        self.mode == SessionMode::Simulation
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
