//! Bézier-Kette: geordnete Punktliste aus Ankern und Steuerpunkten.

use super::segment::{segment_at, segment_count, SegmentPoints};
use super::{CoreError, CurvePoint, Vector2};

/// Standard-Abstand neuer Tangenten-Handles zum Anker (Welteinheiten).
pub const DEFAULT_HANDLE_DISTANCE: f64 = 60.0;

/// Kette kubischer Bézier-Segmente.
///
/// Speicherlayout: `[A0, Cout0, A1, Cin1, Cout1, A2, Cin2, Cout2, A3, Cin3]`.
/// Anker `k ≥ 1` liegt auf Index `3k−1`, direkt gefolgt von seinem
/// Eingangs-Handle (`3k`) und, außer beim letzten Anker, seinem
/// Ausgangs-Handle (`3k+1`). Die Länge ist `0` oder `≡ 1 (mod 3)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BezierCurve {
    points: Vec<CurvePoint>,
}

impl BezierCurve {
    /// Erstellt eine leere Kurve.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Erstellt eine Kurve aus einer flachen Koordinatenliste.
    pub fn from_flat(coords: &[[f64; 2]]) -> Self {
        let mut curve = Self::new();
        curve.load_flat(coords);
        curve
    }

    /// Ob Index `i` laut Layout ein Steuerpunkt ist (1, dann alle `3k` und `3k+1`).
    pub fn is_control_index(i: usize) -> bool {
        i == 1 || (i >= 3 && i % 3 != 2)
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Länge 2 kommt nur durch fremde Koordinatenlisten zustande und wird als
    /// einzelner Punkt dargestellt.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() == 2
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Positionen aller Punkte in Speicherreihenfolge.
    pub fn positions(&self) -> Vec<Vector2> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Indizes aller Anker.
    pub fn anchor_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_anchor())
            .map(|(i, _)| i)
    }

    /// Index des letzten Ankers (`len − 2` ab vier Punkten).
    pub fn last_anchor_index(&self) -> Option<usize> {
        match self.points.len() {
            0 => None,
            1 | 2 => Some(0),
            len => Some(len - 2),
        }
    }

    /// Start- und End-Anker liegen exakt aufeinander.
    pub fn is_loop_closed(&self) -> bool {
        match self.last_anchor_index() {
            Some(last) if last > 0 => self.points[0].pos == self.points[last].pos,
            _ => false,
        }
    }

    pub fn segment_count(&self) -> usize {
        segment_count(self.points.len())
    }

    /// Alle vollständigen Segmente als (Start, CP1, CP2, Ende).
    pub fn segments(&self) -> impl Iterator<Item = SegmentPoints<Vector2>> + '_ {
        (0..self.segment_count()).filter_map(move |i| {
            segment_at(i, &self.points).map(|(a, b, c, d)| (a.pos, b.pos, c.pos, d.pos))
        })
    }

    /// Hängt einen neuen Anker samt Tangenten-Handles an.
    ///
    /// Leere Kurve: nur der Anker. Sonst drei Punkte: Ausgangs-Handle des
    /// bisherigen letzten Ankers, neuer Anker, Eingangs-Handle des neuen Ankers.
    /// Das Ausgangs-Handle spiegelt das vorhandene Eingangs-Handle am Anker
    /// (Tangentenstetigkeit) im Abstand `handle_distance`.
    pub fn append(&mut self, at: Vector2, handle_distance: f64) {
        let Some(last) = self.points.last().copied() else {
            self.points.push(CurvePoint::anchor(at));
            return;
        };

        let outgoing = if last.is_control_point && self.points.len() >= 2 {
            let anchor = self.points[self.points.len() - 2].pos;
            let direction = (anchor - last.pos).normalize();
            anchor + direction.scale(handle_distance)
        } else {
            last.pos + Vector2::new(0.0, -handle_distance)
        };
        let incoming = at + Vector2::new(0.0, handle_distance);

        self.points.extend([
            CurvePoint::control(outgoing),
            CurvePoint::anchor(at),
            CurvePoint::control(incoming),
        ]);
    }

    /// Löscht einen Anker samt zugehöriger Handles.
    ///
    /// - einziger Punkt: Kurve wird geleert
    /// - Anker 0: Anker, sein Ausgangs-Handle und das Eingangs-Handle des
    ///   nächsten Ankers (der damit neuer Start wird)
    /// - letzter Anker: vorheriges Ausgangs-Handle, Anker, Eingangs-Handle
    /// - innerer Anker: Anker, Eingangs- und Ausgangs-Handle
    ///
    /// Steuerpunkte werden abgelehnt; die Kurve bleibt dann unverändert.
    pub fn delete(&mut self, index: usize) -> Result<(), CoreError> {
        let len = self.points.len();
        if index >= len {
            return Err(CoreError::InvalidIndex { index, len });
        }
        if len == 1 {
            self.clear();
            return Ok(());
        }
        if self.points[index].is_control_point {
            return Err(CoreError::ControlPointNotDeletable { index });
        }

        if index == 0 {
            self.points.drain(0..2);
            if self.points.len() > 1 {
                self.points.remove(1);
            }
        } else if index == len - 2 {
            self.points.drain(index - 1..len);
        } else {
            self.points.drain(index..(index + 3).min(len));
        }
        Ok(())
    }

    /// Verschiebt einen Punkt.
    ///
    /// Anker nehmen ihre Handles mit (gleiches Delta). Ein verschobenes Handle
    /// richtet das gepaarte Handle desselben Ankers gegenüberliegend aus und
    /// behält dessen Abstand zum Anker (C1 über die Richtung, nicht den Betrag).
    pub fn move_point(&mut self, index: usize, new_pos: Vector2) -> Result<(), CoreError> {
        let len = self.points.len();
        let Some(target) = self.points.get_mut(index) else {
            return Err(CoreError::InvalidIndex { index, len });
        };
        let delta = new_pos - target.pos;
        target.pos = new_pos;
        let is_control = target.is_control_point;

        if is_control {
            if let Some((anchor, paired)) = self.paired_handle(index) {
                let anchor_pos = self.points[anchor].pos;
                let distance = self.points[paired].pos.distance(anchor_pos);
                self.points[paired].pos =
                    anchor_pos + (anchor_pos - new_pos).normalize().scale(distance);
            }
        } else {
            if index + 1 < len {
                self.points[index + 1].pos = self.points[index + 1].pos + delta;
            }
            if index != 0 && index + 2 < len {
                self.points[index + 2].pos = self.points[index + 2].pos + delta;
            }
        }
        Ok(())
    }

    /// (Anker, gepaartes Handle) für ein Handle, sofern der Anker zwei Handles hat.
    fn paired_handle(&self, index: usize) -> Option<(usize, usize)> {
        let is_control = |i: usize| self.points.get(i).is_some_and(|p| p.is_control_point);

        if index >= 1 && is_control(index + 1) {
            Some((index - 1, index + 1))
        } else if index >= 2 && is_control(index - 1) {
            Some((index - 2, index - 1))
        } else {
            None
        }
    }

    /// Richtet beim Schließen einer Schleife das Handle hinter `end` am Handle
    /// hinter `start` aus (gespiegelt, Betrag bleibt erhalten).
    pub fn align_loop_ends(&mut self, start: usize, end: usize) -> Result<(), CoreError> {
        let len = self.points.len();
        for index in [start, end] {
            if index + 1 >= len {
                return Err(CoreError::InvalidIndex { index, len });
            }
        }

        let start_pos = self.points[start].pos;
        let start_cp = self.points[start + 1].pos;
        let end_pos = self.points[end].pos;
        let end_cp = self.points[end + 1].pos;

        let direction = (start_pos - start_cp).normalize();
        self.points[end + 1].pos = end_pos + direction.scale(end_cp.distance(end_pos));
        Ok(())
    }

    /// Index des nächstgelegenen Punkts, falls näher als `threshold`.
    ///
    /// `exclude` wird übersprungen (z.B. der gerade gezogene Punkt).
    pub fn closest_point_index(
        &self,
        target: Vector2,
        threshold: f64,
        exclude: Option<usize>,
    ) -> Option<usize> {
        let (index, dist_sq) = self
            .points
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != exclude)
            .map(|(i, p)| (i, p.pos.distance_squared(target)))
            .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((i, d)),
            })?;

        (dist_sq < threshold * threshold).then_some(index)
    }

    pub fn select(&mut self, index: usize) {
        if let Some(p) = self.points.get_mut(index) {
            p.selected = true;
        }
    }

    pub fn deselect(&mut self, index: usize) {
        if let Some(p) = self.points.get_mut(index) {
            p.selected = false;
        }
    }

    pub fn deselect_all(&mut self) {
        for p in &mut self.points {
            p.selected = false;
        }
    }

    /// Flache Koordinatenliste `[[x, y], …]` in Speicherreihenfolge.
    pub fn to_flat(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| p.pos.to_array()).collect()
    }

    /// Ersetzt alle Punkte; die Steuerpunkt-Flags ergeben sich aus dem Index.
    pub fn load_flat(&mut self, coords: &[[f64; 2]]) {
        self.points = coords
            .iter()
            .enumerate()
            .map(|(i, &xy)| CurvePoint {
                pos: Vector2::from(xy),
                is_control_point: Self::is_control_index(i),
                selected: false,
            })
            .collect();

        let len = self.points.len();
        if len != 0 && len % 3 != 1 {
            log::warn!(
                "Koordinatenliste mit {} Punkten entspricht keiner vollständigen Bézier-Kette",
                len
            );
        }
    }
}
