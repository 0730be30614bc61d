//! Unveränderlicher 2D-Vektor für Kurvenpunkte und Phasor-Ketten.
//!
//! Dünne Hülle um `glam::DVec2`: jede Operation liefert einen neuen Wert.
//! Divisionen durch Null werden als `CoreError::DivisionByZero` gemeldet,
//! nur `normalize()` des Nullvektors liefert per Konvention den Nullvektor.

use super::CoreError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 2D-Vektor (Welteinheiten, y zeigt nach unten)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// "Oben" im Bildschirm-Koordinatensystem (negatives y)
    pub const UP: Self = Self::new(0.0, -1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Standard-Toleranz für `approx_eq`.
    pub const EPSILON: f64 = 1e-6;

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vektor aus Winkel (Radiant) und Länge.
    pub fn from_angle(angle: f64, length: f64) -> Self {
        (DVec2::from_angle(angle) * length).into()
    }

    fn raw(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Multiplikation mit einem Skalar.
    pub fn scale(self, factor: f64) -> Self {
        (self.raw() * factor).into()
    }

    /// Division durch einen Skalar; `0` ergibt `DivisionByZero`.
    pub fn checked_div(self, divisor: f64) -> Result<Self, CoreError> {
        if divisor == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok((self.raw() / divisor).into())
    }

    /// Skalarprodukt: A·B = Ax·Bx + Ay·By
    pub fn dot(self, other: Self) -> f64 {
        self.raw().dot(other.raw())
    }

    /// 2D-Kreuzprodukt (vorzeichenbehaftete Parallelogramm-Fläche).
    pub fn cross(self, other: Self) -> f64 {
        self.raw().perp_dot(other.raw())
    }

    pub fn length(self) -> f64 {
        self.raw().length()
    }

    pub fn length_squared(self) -> f64 {
        self.raw().length_squared()
    }

    pub fn distance(self, other: Self) -> f64 {
        self.raw().distance(other.raw())
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        self.raw().distance_squared(other.raw())
    }

    /// Einheitsvektor; der Nullvektor bleibt der Nullvektor.
    pub fn normalize(self) -> Self {
        self.raw().normalize_or_zero().into()
    }

    /// Begrenzt die Länge auf `max`.
    pub fn limit(self, max: f64) -> Self {
        if self.length_squared() > max * max {
            self.normalize().scale(max)
        } else {
            self
        }
    }

    /// Rotation um `angle` (Radiant).
    pub fn rotate(self, angle: f64) -> Self {
        DVec2::from_angle(angle).rotate(self.raw()).into()
    }

    /// Winkel des Vektors in (-π, π].
    pub fn heading(self) -> f64 {
        self.raw().to_angle()
    }

    /// Winkel zwischen zwei Vektoren; Nullvektoren ergeben `DivisionByZero`.
    pub fn angle_between(self, other: Self) -> Result<f64, CoreError> {
        let denom = self.length() * other.length();
        if denom == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok((self.dot(other) / denom).clamp(-1.0, 1.0).acos())
    }

    /// Projektion auf `axis` (muss nicht normiert sein). Nullachse → Nullvektor.
    pub fn project(self, axis: Self) -> Self {
        let axis_len_sq = axis.length_squared();
        if axis_len_sq == 0.0 {
            return Self::ZERO;
        }
        axis.scale(self.dot(axis) / axis_len_sq)
    }

    /// Zerlegt den Vektor in (parallel, senkrecht) relativ zu `axis`.
    pub fn resolve(self, axis: Self) -> (Self, Self) {
        let parallel = self.project(axis);
        (parallel, self - parallel)
    }

    /// Spiegelung an einer (normierten) Normalen: R = V − 2(V·N)N
    pub fn reflect(self, normal: Self) -> Self {
        self - normal.scale(2.0 * self.dot(normal))
    }

    /// Lineare Interpolation, exakt an beiden Enden (t=0 → self, t=1 → target).
    pub fn lerp(self, target: Self, t: f64) -> Self {
        (self.raw() * (1.0 - t) + target.raw() * t).into()
    }

    /// Vergleich mit Toleranz pro Komponente.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        v.raw()
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        (self.raw() + rhs.raw()).into()
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        (self.raw() - rhs.raw()).into()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        (-self.raw()).into()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:.2}, {:.2})", self.x, self.y)
    }
}
