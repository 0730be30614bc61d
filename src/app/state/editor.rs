/// Wirkung eines Klicks auf die Zeichenfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Klick ins Leere hängt einen Anker an, Klick auf einen Punkt greift ihn
    #[default]
    Add,
    /// Klick auf einen Anker löscht ihn
    Delete,
}

/// Laufender Zieh-Vorgang
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Index des gezogenen Punkts
    pub index: usize,
    /// Nächster Nachbar innerhalb des Snap-Radius
    pub snap_candidate: Option<usize>,
}

/// Zustand des Kurven-Editors
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Modus
    pub edit_mode: EditMode,
    /// Aktiver Zieh-Vorgang (None = kein Drag)
    pub drag: Option<DragState>,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand (Add-Modus, kein Drag).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
