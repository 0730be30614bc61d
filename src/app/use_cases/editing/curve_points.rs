//! Use-Case: Anker anhängen und löschen.

use crate::app::state::EditMode;
use crate::app::AppState;
use crate::core::Vector2;

/// Hängt einen Anker samt Tangenten-Handles an die Kurve an.
pub fn append_point(state: &mut AppState, pos: Vector2) {
    state.curve.append(pos, state.options.handle_distance);
    log::info!(
        "Anker bei ({:.1}, {:.1}) angehängt, Kurve hat {} Punkte",
        pos.x,
        pos.y,
        state.curve.len()
    );
}

/// Löscht einen Anker. Ungültige Ziele (Steuerpunkt, Index) bleiben ohne Wirkung.
pub fn delete_point(state: &mut AppState, index: usize) {
    match state.curve.delete(index) {
        Ok(()) => {
            state.editor.drag = None;
            log::info!(
                "Anker {} gelöscht, Kurve hat {} Punkte",
                index,
                state.curve.len()
            );
        }
        Err(e) => log::debug!("Löschen ignoriert: {}", e),
    }
}

/// Entfernt alle Punkte.
pub fn clear_curve(state: &mut AppState) {
    state.curve.clear();
    state.editor.drag = None;
    log::info!("Kurve geleert");
}

pub fn set_edit_mode(state: &mut AppState, mode: EditMode) {
    state.editor.edit_mode = mode;
    log::info!("Editier-Modus: {:?}", mode);
}
