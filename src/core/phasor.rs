//! Ein Term der komplexen Fourier-Reihe als rotierender Zeiger.

use super::{Complex, Vector2};
use std::f64::consts::TAU;

/// Rotierender Zeiger: Amplitude, ganzzahlige Frequenz, Startphase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor {
    pub amplitude: f64,
    pub frequency: i32,
    pub initial_phase: f64,
}

impl Phasor {
    pub fn new(amplitude: f64, frequency: i32, initial_phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            initial_phase,
        }
    }

    /// Wert zum Zeitpunkt `t`: Complex(amplitude, k·2π·t + φ0)
    pub fn value_at(&self, t: f64) -> Complex {
        Complex::new(
            self.amplitude,
            f64::from(self.frequency) * TAU * t + self.initial_phase,
        )
    }

    /// Radius des Kreises, den die Zeigerspitze beschreibt.
    pub fn radius(&self) -> f64 {
        self.amplitude.abs()
    }
}

/// Summiert die Zeiger Spitze an Spitze in gegebener Reihenfolge.
///
/// Liefert alle Zwischensummen: Eintrag 0 ist der Ursprung, der letzte
/// Eintrag der angenäherte Kurvenpunkt (`phasors.len() + 1` Einträge).
pub fn phasor_chain(phasors: &[Phasor], t: f64) -> Vec<Vector2> {
    let mut chain = Vec::with_capacity(phasors.len() + 1);
    let mut tip = Vector2::ZERO;
    chain.push(tip);
    for phasor in phasors {
        tip = tip + phasor.value_at(t).to_vector();
        chain.push(tip);
    }
    chain
}

/// Summe aller Zeiger zum Zeitpunkt `t`.
pub fn phasor_sum(phasors: &[Phasor], t: f64) -> Vector2 {
    phasors
        .iter()
        .fold(Vector2::ZERO, |acc, p| acc + p.value_at(t).to_vector())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_phasor_rotiert_mit_frequenz() {
        let p = Phasor::new(2.0, 1, 0.0);
        let quarter = p.value_at(0.25).to_vector();
        assert_abs_diff_eq!(quarter.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(quarter.y, 2.0, epsilon = 1e-12);

        let back = Phasor::new(1.0, -2, 0.5).value_at(0.5);
        assert_abs_diff_eq!(back.phase, -2.0 * TAU * 0.5 + 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_kette_endet_in_summe() {
        let phasors = [
            Phasor::new(1.0, 0, 0.0),
            Phasor::new(0.5, 1, 0.0),
            Phasor::new(0.25, -1, 1.0),
        ];
        let chain = phasor_chain(&phasors, 0.3);
        assert_eq!(chain.len(), 4);
        assert_eq!(chain[0], Vector2::ZERO);
        let sum = phasor_sum(&phasors, 0.3);
        assert!(chain[3].approx_eq(sum, 1e-12));
    }
}
