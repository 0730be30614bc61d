//! Handler für Datei-Operationen (Zeichnung laden/speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt eine Zeichnung aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_drawing(state, &path)
}

/// Speichert die Zeichnung unter dem übergebenen Pfad.
pub fn save(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::save_drawing(state, &path)
}

pub fn load_premade(state: &mut AppState) {
    use_cases::file_io::load_premade(state);
}

pub fn rename(state: &mut AppState, name: String) {
    use_cases::file_io::rename_drawing(state, name);
}
