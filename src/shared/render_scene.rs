//! Render-Szene als expliziter Übergabevertrag zwischen App und Darstellung.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein beliebiges Frontend sie konsumiert.

use super::options::EditorOptions;
use crate::core::Vector2;

/// Sitzungsmodus: Kurve zeichnen oder Epizykel abspielen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Drawing,
    Simulation,
}

/// Darstellungsdaten eines Kurvenpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePoint {
    pub pos: Vector2,
    pub is_control_point: bool,
    pub selected: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktueller Modus
    pub mode: SessionMode,
    /// Kurvenpunkte mit Rolle und Auswahl
    pub points: Vec<ScenePoint>,
    /// Vollständige Segmente (Start, CP1, CP2, Ende)
    pub segments: Vec<(Vector2, Vector2, Vector2, Vector2)>,
    /// Kurve mit zwei Punkten wird als einzelner Punkt gezeichnet
    pub degenerate: bool,
    /// Umriss der Funktion (leer, wenn ausgeblendet oder nicht berechnet)
    pub function_outline: Vec<Vector2>,
    /// Zwischensummen der Zeiger-Kette, beginnend im Ursprung
    pub phasor_chain: Vec<Vector2>,
    /// Kreisradien je Zeiger (Mittelpunkt = vorheriges Kettenglied)
    pub circle_radii: Vec<f64>,
    /// Bisher gezeichnete Spur
    pub trace: Vec<Vector2>,
    /// Wiedergabe-Fortschritt in [0, 1)
    pub progress: f64,
    /// Größe der Zeichenfläche
    pub canvas_size: [f64; 2],
    /// Laufzeit-Optionen (Anzeige-Schalter)
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Zeiger zum Zeichnen vorhanden sind.
    pub fn has_phasors(&self) -> bool {
        self.phasor_chain.len() > 1
    }

    /// Zuletzt gezeichneter Punkt der Spur (auch bei ausgeblendeter Kette).
    pub fn tip(&self) -> Option<Vector2> {
        self.trace.last().copied()
    }
}
