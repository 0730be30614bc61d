use super::super::state::EditMode;
use crate::core::{FrequencyRange, Vector2};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeichenfläche ──
    /// Zeiger gedrückt (Pick: anhängen, greifen oder löschen je nach Modus)
    CanvasPressed { pos: Vector2 },
    /// Zeiger bewegt bei gedrückter Taste
    CanvasDragged { pos: Vector2 },
    /// Zeiger losgelassen
    CanvasReleased,
    /// Zeiger hat die Zeichenfläche verlassen
    CanvasLeft,
    /// Editier-Modus umschalten
    EditModeChanged { mode: EditMode },
    /// Alle Punkte entfernen
    ClearCurveRequested,

    // ── Sitzung ──
    /// Zeichnung übernehmen: Funktion bauen und Wiedergabe starten
    FinishDrawingRequested,
    /// Zurück zum Zeichnen
    BackToDrawingRequested,

    // ── Wiedergabe ──
    /// Frame-Takt mit vergangener Zeit in Sekunden
    FrameTick { delta: f64 },
    PlayRequested,
    PauseRequested,
    TogglePlaybackRequested,
    /// Fortschritt per Regler setzen
    ProgressScrubbed { progress: f64 },
    SpeedChanged { speed: f64 },
    /// Zeiger-Anzahl geändert (bestimmt den Frequenzbereich)
    VectorCountChanged { count: u32 },
    /// Frequenzbereich direkt setzen
    FrequencyRangeChanged { range: FrequencyRange },

    // ── Datei-I/O ──
    /// Zeichnung aus JSON-Datei laden
    DrawingFileSelected { path: String },
    /// Zeichnung als JSON speichern
    SaveDrawingPathSelected { path: String },
    /// Eingebaute Beispiel-Zeichnung laden
    PremadeDrawingRequested,
    /// Name der Zeichnung ändern
    DrawingRenamed { name: String },

    // ── Optionen ──
    OptionsChanged { options: EditorOptions },
    ResetOptionsRequested,
}
