use super::Vector2;

/// Einzelner Punkt einer Bézier-Kette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Position in Welteinheiten
    pub pos: Vector2,
    /// true = Steuerpunkt (Tangenten-Handle), false = Anker auf der Kurve
    pub is_control_point: bool,
    /// Transienter Auswahlzustand (Hervorhebung beim Ziehen/Snappen)
    pub selected: bool,
}

impl CurvePoint {
    /// Erstellt einen Anker.
    pub fn anchor(pos: Vector2) -> Self {
        Self {
            pos,
            is_control_point: false,
            selected: false,
        }
    }

    /// Erstellt einen Steuerpunkt.
    pub fn control(pos: Vector2) -> Self {
        Self {
            pos,
            is_control_point: true,
            selected: false,
        }
    }

    pub fn is_anchor(&self) -> bool {
        !self.is_control_point
    }
}
