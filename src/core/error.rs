//! Fehlertypen des Kerns (Kurven-Editing, Numerik, Fourier-Extraktion).

use thiserror::Error;

/// Fehler der Kern-Operationen.
///
/// Strukturelle Verletzungen beim Editieren lassen die Kurve unverändert;
/// numerische Unmöglichkeiten werden explizit gemeldet statt `NaN` zu liefern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Punkt-Index außerhalb des gültigen Bereichs
    #[error("Ungültiger Punkt-Index {index} (Kurve hat {len} Punkte)")]
    InvalidIndex { index: usize, len: usize },
    /// Steuerpunkte dürfen nicht direkt gelöscht werden
    #[error("Punkt {index} ist ein Steuerpunkt und kann nicht gelöscht werden")]
    ControlPointNotDeletable { index: usize },
    /// Auswertung einer Funktion ohne Stützstellen
    #[error("Funktion enthält keine Stützstellen")]
    EmptyFunction,
    /// Division durch einen Skalar bzw. Vektor der Länge 0
    #[error("Division durch Null")]
    DivisionByZero,
    /// Skalierung einer komplexen Zahl mit negativem Faktor
    #[error("Negativer Skalierungsfaktor {factor} für komplexe Zahl")]
    DegenerateScale { factor: f64 },
    /// Stützstelle kleiner als die vorherige
    #[error("Stützstelle {input} liegt vor der vorherigen Stützstelle {previous}")]
    NonMonotonicDomain { previous: f64, input: f64 },
}

/// Nicht-fatale Hinweise bei der Koeffizienten-Extraktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionWarning {
    /// Erste und letzte Stützstelle unterscheiden sich, die Reihe nähert
    /// eine unstetige Funktion an.
    NonClosedCurve,
}
