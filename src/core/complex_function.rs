//! Periodische komplexwertige Funktion auf [0, 1] und Fourier-Extraktion.
//!
//! Aus einer Bézier-Kette wird eine dichte Polylinie, deren Abtastwerte
//! gleichmäßig auf `t ∈ [0, 1]` verteilt werden. Die Fourier-Koeffizienten
//! entstehen per Riemann-Summe direkt aus dieser Stufenfunktion.

use super::phasor::Phasor;
use super::segment::{flatten, parameter_steps};
use super::{BezierCurve, Complex, CoreError, ExtractionWarning, Vector2};

/// Symmetrischer (inklusiver) Frequenzbereich der Fourier-Reihe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRange {
    pub from: i32,
    pub to: i32,
}

impl FrequencyRange {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Bereich aus einer Zeiger-Anzahl: `[−⌊n/2⌋, n − ⌊n/2⌋]`.
    pub fn from_vector_count(count: u32) -> Self {
        let half = (count / 2) as i32;
        Self::new(-half, count as i32 - half)
    }

    /// Anzahl der Frequenzen im Bereich (0 bei `from > to`).
    pub fn len(&self) -> usize {
        if self.from > self.to {
            0
        } else {
            (self.to - self.from) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.from..=self.to
    }
}

/// Stufenfunktion `t → Complex` samt abgeleiteter Zeiger.
#[derive(Debug, Clone, Default)]
pub struct ComplexFunction {
    /// Stützstellen, monoton nicht fallend
    domain: Vec<f64>,
    /// Funktionswerte je Stützstelle
    samples: Vec<Complex>,
    /// Zeiger in aufsteigender Frequenz
    phasors: Vec<Phasor>,
}

impl ComplexFunction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Stützstelle an; sie darf nicht vor der vorherigen liegen.
    pub fn add_mapping(&mut self, input: f64, output: Complex) -> Result<(), CoreError> {
        if let Some(&previous) = self.domain.last() {
            if input < previous {
                return Err(CoreError::NonMonotonicDomain { previous, input });
            }
        }
        self.domain.push(input);
        self.samples.push(output);
        Ok(())
    }

    /// Verteilt die Polylinie gleichmäßig: Punkt `i` von `n` ↦ `t = i/(n−1)`.
    pub fn from_polyline(polyline: &[Vector2]) -> Self {
        let n = polyline.len();
        let denom = n.saturating_sub(1).max(1) as f64;
        Self {
            domain: (0..n).map(|i| i as f64 / denom).collect(),
            samples: polyline.iter().map(|&p| Complex::from_vector(p)).collect(),
            phasors: Vec::new(),
        }
    }

    /// Flacht die Punktliste einer Bézier-Kette ab (`sampling_step` je Segment).
    pub fn from_curve_points(points: &[Vector2], sampling_step: f64) -> Self {
        Self::from_polyline(&flatten(points, sampling_step))
    }

    pub fn from_curve(curve: &BezierCurve, sampling_step: f64) -> Self {
        Self::from_curve_points(&curve.positions(), sampling_step)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    pub fn samples(&self) -> &[Complex] {
        &self.samples
    }

    /// Zeiger der letzten Extraktion, aufsteigend nach Frequenz.
    pub fn phasors(&self) -> &[Phasor] {
        &self.phasors
    }

    /// Erste und letzte Stützstelle sind (exakt polar) gleich.
    pub fn is_closed(&self) -> bool {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Wert bei `t` (rechtsstetige Stufenfunktion, keine Interpolation).
    ///
    /// Unterhalb des Definitionsbereichs der erste, oberhalb der letzte Wert.
    pub fn value_at(&self, t: f64) -> Result<Complex, CoreError> {
        let (Some(&first), Some(&last)) = (self.samples.first(), self.samples.last()) else {
            return Err(CoreError::EmptyFunction);
        };

        let pos = self.domain.partition_point(|&x| x < t);
        if pos == 0 {
            Ok(first)
        } else if pos >= self.samples.len() - 1 {
            Ok(last)
        } else {
            Ok(self.samples[pos])
        }
    }

    /// ∫₀¹ f(t)·factor(t) dt als Riemann-Summe bei `t = 0, dt, …, 1 − dt`.
    ///
    /// `dt = 1 / round(1 / step)`; `t = 1` fällt als Periodengrenze weg.
    pub fn integrate_with_phasor(&self, factor: &Phasor, step: f64) -> Result<Complex, CoreError> {
        let values = self.grid_values(step)?;
        Ok(Self::riemann_sum(&values, factor))
    }

    /// Funktionswerte auf dem Integrationsgitter.
    fn grid_values(&self, step: f64) -> Result<Vec<(f64, Complex)>, CoreError> {
        if self.is_empty() {
            return Err(CoreError::EmptyFunction);
        }
        let steps = parameter_steps(step);
        (0..steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                self.value_at(t).map(|v| (t, v))
            })
            .collect()
    }

    fn riemann_sum(values: &[(f64, Complex)], factor: &Phasor) -> Complex {
        let dt = 1.0 / values.len().max(1) as f64;
        let (re, im) = values.iter().fold((0.0, 0.0), |(re, im), &(t, value)| {
            let term = (factor.value_at(t) * value).scale(dt);
            (re + term.re(), im + term.im())
        });
        Complex::from_cartesian(re, im)
    }

    /// Berechnet je Frequenz `k ∈ range` einen Zeiger aus
    /// `c_k = ∫₀¹ f(t)·e^{−i2πkt} dt` und ersetzt die bisherigen Zeiger.
    ///
    /// Eine offene Kurve (erste ≠ letzte Stützstelle) wird trotzdem zerlegt,
    /// liefert dann aber `ExtractionWarning::NonClosedCurve`.
    pub fn compute_phasors(
        &mut self,
        range: FrequencyRange,
        step: f64,
    ) -> Result<Option<ExtractionWarning>, CoreError> {
        let values = self.grid_values(step)?;

        let warning = if self.is_closed() {
            None
        } else {
            log::warn!("Funktion ist nicht geschlossen, Fourier-Reihe nähert eine Unstetigkeit an");
            Some(ExtractionWarning::NonClosedCurve)
        };

        self.phasors = range
            .iter()
            .map(|k| {
                let coefficient = Self::riemann_sum(&values, &Phasor::new(1.0, -k, 0.0));
                Phasor::new(coefficient.amplitude, k, coefficient.phase)
            })
            .collect();

        log::debug!(
            "{} Zeiger für Frequenzen {}..={} berechnet ({} Stützstellen)",
            self.phasors.len(),
            range.from,
            range.to,
            values.len()
        );
        Ok(warning)
    }

    /// Kopie mit neu berechneten Zeigern; das Original bleibt unverändert.
    pub fn with_phasors(
        &self,
        range: FrequencyRange,
        step: f64,
    ) -> Result<(Self, Option<ExtractionWarning>), CoreError> {
        let mut function = self.clone();
        let warning = function.compute_phasors(range, step)?;
        Ok((function, warning))
    }

    /// Umriss der Funktion für die Darstellung, abgetastet bei `t = 0, step, …, 1`.
    pub fn outline(&self, step: f64) -> Result<Vec<Vector2>, CoreError> {
        let steps = parameter_steps(step);
        (0..=steps)
            .map(|i| self.value_at(i as f64 / steps as f64).map(Complex::to_vector))
            .collect()
    }
}

#[cfg(test)]
mod tests;
