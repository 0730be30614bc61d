//! Zentrale Konfiguration für den Epizykel-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Abtastung ───────────────────────────────────────────────────────

/// Parameter-Schrittweite beim Abflachen eines Bézier-Segments.
pub const CURVE_SAMPLING_PRECISION: f64 = 0.0005;
/// Schrittweite der Riemann-Summe bei der Koeffizienten-Berechnung.
pub const INTEGRATION_PRECISION: f64 = 0.0005;
/// Schrittweite beim Zeichnen des Funktions-Umrisses.
pub const FUNCTION_DRAWING_PRECISION: f64 = 0.001;

// ── Editieren ───────────────────────────────────────────────────────

/// Abstand neuer Tangenten-Handles zum Anker.
pub const HANDLE_DISTANCE: f64 = 60.0;
/// Pick-Radius: Klick innerhalb dieses Radius trifft einen vorhandenen Punkt.
pub const PICK_RADIUS: f64 = 20.0;
/// Snap-Radius: gezogener Punkt rastet auf Nachbarn innerhalb dieses Radius ein.
pub const SNAP_RADIUS: f64 = 10.0;

// ── Wiedergabe ──────────────────────────────────────────────────────

/// Fortschritt pro Sekunde (0.1 = ein Umlauf in 10 s).
pub const ANIMATION_SPEED: f64 = 0.1;
/// Standard-Anzahl der Zeiger.
pub const VECTOR_COUNT: u32 = 100;
/// Obergrenze der Zeiger-Anzahl.
pub const MAX_VECTOR_COUNT: u32 = 500;
/// Maximales Frame-Delta in Sekunden (verhindert Sprünge nach Pausen).
pub const MAX_FRAME_DELTA: f64 = 0.05;

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Standard-Größe der Zeichenfläche [Breite, Höhe].
pub const CANVAS_SIZE: [f64; 2] = [800.0, 600.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `fourier_epicycles.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Abtastung ───────────────────────────────────────────────
    /// Parameter-Schritt je Bézier-Segment
    pub curve_sampling_precision: f64,
    /// Schritt der Riemann-Summe
    pub integration_precision: f64,
    /// Schritt für den Funktions-Umriss
    pub function_drawing_precision: f64,

    // ── Editieren ───────────────────────────────────────────────
    /// Handle-Abstand beim Anhängen
    pub handle_distance: f64,
    /// Pick-Radius für Klicks
    pub pick_radius: f64,
    /// Snap-Radius beim Ziehen
    pub snap_radius: f64,

    // ── Wiedergabe ──────────────────────────────────────────────
    /// Fortschritt pro Sekunde
    pub animation_speed: f64,
    /// Anzahl der Zeiger (Frequenzbereich `[−⌊n/2⌋, n − ⌊n/2⌋]`)
    pub vector_count: u32,
    /// Obergrenze für `vector_count`
    pub max_vector_count: u32,
    /// Frame-Delta-Obergrenze in Sekunden
    pub max_frame_delta: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Kreise der Zeiger anzeigen
    pub show_circles: bool,
    /// Zeiger-Kette anzeigen
    pub show_vectors: bool,
    /// Funktions-Umriss anzeigen
    pub show_function: bool,
    /// Größe der Zeichenfläche
    pub canvas_size: [f64; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_sampling_precision: CURVE_SAMPLING_PRECISION,
            integration_precision: INTEGRATION_PRECISION,
            function_drawing_precision: FUNCTION_DRAWING_PRECISION,

            handle_distance: HANDLE_DISTANCE,
            pick_radius: PICK_RADIUS,
            snap_radius: SNAP_RADIUS,

            animation_speed: ANIMATION_SPEED,
            vector_count: VECTOR_COUNT,
            max_vector_count: MAX_VECTOR_COUNT,
            max_frame_delta: MAX_FRAME_DELTA,

            show_circles: false,
            show_vectors: true,
            show_function: true,
            canvas_size: CANVAS_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fourier-epicycles"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fourier_epicycles.toml")
    }

    /// Zeiger-Anzahl, begrenzt auf `max_vector_count`.
    pub fn clamped_vector_count(&self, requested: u32) -> u32 {
        requested.min(self.max_vector_count)
    }
}
