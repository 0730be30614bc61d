use super::super::state::EditMode;
use crate::core::{FrequencyRange, Vector2};
use crate::shared::EditorOptions;

/// Mutierende Commands, die der Controller zentral ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Kurve ──
    /// Anker samt Handles anhängen
    AppendPoint { pos: Vector2 },
    /// Anker samt Handles löschen
    DeletePoint { index: usize },
    /// Punkt greifen
    BeginDrag { index: usize },
    /// Gegriffenen Punkt verschieben und Snap-Kandidat bestimmen
    UpdateDrag { pos: Vector2 },
    /// Loslassen: ggf. Schleife schließen und einrasten
    EndDrag,
    /// Drag ohne Einrasten beenden
    CancelDrag,
    SetEditMode { mode: EditMode },
    ClearCurve,

    // ── Fourier ──
    /// Funktion aus der Kurve bauen (ohne Zeiger)
    BuildFunction,
    /// Zeiger-Anzahl setzen und Zeiger neu berechnen
    SetVectorCount { count: u32 },
    /// Zeiger für einen expliziten Frequenzbereich berechnen
    SetFrequencyRange { range: FrequencyRange },

    // ── Sitzung ──
    EnterSimulation,
    EnterDrawing,

    // ── Wiedergabe ──
    Tick { delta: f64 },
    Play,
    Pause,
    TogglePlayback,
    ScrubProgress { progress: f64 },
    SetSpeed { speed: f64 },

    // ── Datei-I/O ──
    LoadDrawing { path: String },
    SaveDrawing { path: String },
    LoadPremade,
    RenameDrawing { name: String },

    // ── Optionen ──
    ApplyOptions { options: EditorOptions },
    ResetOptions,
}
