//! Komplexe Zahl in Polarform (Amplitude, Phase).

use super::{CoreError, Vector2};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Komplexe Zahl in Polarform.
///
/// `PartialEq` vergleicht exakt die Felder (Amplitude, Phase), nicht die Lage
/// in der komplexen Ebene: zwei Nullen mit unterschiedlicher Phase sind ungleich.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Betrag (Konvention: ≥ 0)
    pub amplitude: f64,
    /// Phase in Radiant
    pub phase: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(amplitude: f64, phase: f64) -> Self {
        Self { amplitude, phase }
    }

    /// amplitude = hypot(re, im), phase = atan2(im, re)
    pub fn from_cartesian(re: f64, im: f64) -> Self {
        Self::new(re.hypot(im), im.atan2(re))
    }

    pub fn from_vector(v: Vector2) -> Self {
        Self::from_cartesian(v.x, v.y)
    }

    pub fn re(self) -> f64 {
        self.amplitude * self.phase.cos()
    }

    pub fn im(self) -> f64 {
        self.amplitude * self.phase.sin()
    }

    pub fn to_vector(self) -> Vector2 {
        let (sin, cos) = self.phase.sin_cos();
        Vector2::new(self.amplitude * cos, self.amplitude * sin)
    }

    /// Skaliert die Amplitude.
    ///
    /// Ein negativer Faktor wird protokolliert und mit seinem Betrag
    /// angewendet, damit die Polarform gültig bleibt.
    pub fn scale(self, factor: f64) -> Self {
        if factor < 0.0 {
            log::warn!(
                "Complex::scale: negativer Faktor {}, verwende Betrag",
                factor
            );
        }
        Self::new(factor.abs() * self.amplitude, self.phase)
    }

    /// Wie `scale`, meldet einen negativen Faktor aber als Fehler.
    pub fn checked_scale(self, factor: f64) -> Result<Self, CoreError> {
        if factor < 0.0 {
            return Err(CoreError::DegenerateScale { factor });
        }
        Ok(Self::new(factor * self.amplitude, self.phase))
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.amplitude * rhs.amplitude, self.phase + rhs.phase)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_cartesian(self.re() + rhs.re(), self.im() + rhs.im())
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_cartesian(self.re() - rhs.re(), self.im() - rhs.im())
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let im = self.im();
        let sign = if im < 0.0 { '-' } else { '+' };
        write!(f, "{:.2} {} i{:.2}", self.re(), sign, im.abs())
    }
}
