//! Eingebaute Beispiel-Zeichnungen.

use crate::core::BezierCurve;
use crate::core::Vector2;

/// Kreisnäherung kubischer Béziers: Handle-Länge = κ · Radius.
const KAPPA: f64 = 0.552_284_749_831;

/// Geschlossener Kreis aus vier Segmenten, Start rechts vom Mittelpunkt.
///
/// Erster und letzter Anker liegen exakt aufeinander, die Handles am
/// Schließpunkt sind gespiegelt.
pub fn circle(center: Vector2, radius: f64) -> BezierCurve {
    let k = KAPPA * radius;
    let at = |x: f64, y: f64| (center + Vector2::new(x, y)).to_array();

    let coords = [
        at(radius, 0.0),
        at(radius, k),
        at(0.0, radius),
        at(k, radius),
        at(-k, radius),
        at(-radius, 0.0),
        at(-radius, k),
        at(-radius, -k),
        at(0.0, -radius),
        at(-k, -radius),
        at(k, -radius),
        at(radius, 0.0),
        at(radius, -k),
    ];
    BezierCurve::from_flat(&coords)
}
