//! Segment-Geometrie: Zuordnung der verschachtelten Punktliste zu kubischen
//! Bézier-Segmenten und Abtastung per De-Casteljau.

use super::Vector2;

/// Vier Punkte eines kubischen Segments: (Start, CP1, CP2, Ende).
pub type SegmentPoints<T> = (T, T, T, T);

/// Liefert die vier Punkte des `i`-ten kubischen Segments.
///
/// Die Punktliste speichert `[A0, Cout0, A1, Cin1, Cout1, A2, Cin2, …]`:
/// - Segment 0: Indizes `(0, 1, 3, 2)`
/// - Segment i>0: `(3i−1, 3i+1, 3i+3, 3i+2)`
///
/// Der Eingangs-Steuerpunkt eines Ankers liegt *hinter* dem Anker. Deshalb ist
/// CP2 stets der höchste Index; fehlt er, existiert das Segment nicht.
pub fn segment_at<T: Copy>(i: usize, points: &[T]) -> Option<SegmentPoints<T>> {
    let (start, cp1, cp2, end) = if i == 0 {
        (0, 1, 3, 2)
    } else {
        let start = 3 * i - 1;
        (start, start + 2, start + 4, start + 3)
    };

    if cp2 >= points.len() {
        return None;
    }
    Some((points[start], points[cp1], points[cp2], points[end]))
}

/// Anzahl vollständiger Segmente in einer Punktliste der Länge `len`.
pub fn segment_count(len: usize) -> usize {
    if len < 4 {
        0
    } else {
        (len - 1) / 3
    }
}

/// Punkt auf dem kubischen Segment bei `t` (De-Casteljau-Kaskade 3 → 2 → 1).
pub fn cubic_point(p0: Vector2, c0: Vector2, c1: Vector2, p1: Vector2, t: f64) -> Vector2 {
    let a = p0.lerp(c0, t);
    let b = c0.lerp(c1, t);
    let c = c1.lerp(p1, t);
    let d = a.lerp(b, t);
    let e = b.lerp(c, t);
    d.lerp(e, t)
}

/// Anzahl der Parameterschritte für eine Schrittweite (mindestens 1).
///
/// Die effektive Schrittweite ist `1 / steps`, damit `t = 1` exakt erreicht wird.
pub fn parameter_steps(step: f64) -> usize {
    if step.is_nan() || step <= 0.0 {
        return 1;
    }
    ((1.0 / step).round() as usize).max(1)
}

/// Tastet ein Segment bei `t = 0, step, …, 1` ab (beide Enden enthalten).
pub fn sample_segment(segment: SegmentPoints<Vector2>, step: f64) -> Vec<Vector2> {
    let (p0, c0, c1, p1) = segment;
    let steps = parameter_steps(step);
    (0..=steps)
        .map(|i| cubic_point(p0, c0, c1, p1, i as f64 / steps as f64))
        .collect()
}

/// Tastet alle Segmente ab und hängt die Abtastwerte aneinander.
///
/// Segmentgrenzen erscheinen doppelt (Ende von i und Start von i+1);
/// es wird kein Punkt verworfen.
pub fn flatten(points: &[Vector2], step: f64) -> Vec<Vector2> {
    let mut polyline = Vec::new();
    for i in 0.. {
        let Some(segment) = segment_at(i, points) else {
            break;
        };
        polyline.extend(sample_segment(segment, step));
    }
    polyline
}
