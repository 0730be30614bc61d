//! Use-Case: Punkt ziehen, einrasten, Schleife schließen.

use crate::app::state::DragState;
use crate::app::AppState;
use crate::core::Vector2;

/// Greift einen Punkt und markiert ihn.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if index >= state.curve.len() {
        log::debug!("Drag ignoriert: Index {} außerhalb der Kurve", index);
        return;
    }
    state.curve.deselect_all();
    state.curve.select(index);
    state.editor.drag = Some(DragState {
        index,
        snap_candidate: None,
    });
}

/// Verschiebt den gegriffenen Punkt und aktualisiert den Snap-Kandidaten.
pub fn update_drag(state: &mut AppState, pos: Vector2) {
    let Some(drag) = state.editor.drag else {
        return;
    };
    if let Err(e) = state.curve.move_point(drag.index, pos) {
        log::debug!("Drag-Update ignoriert: {}", e);
        return;
    }

    let candidate =
        state
            .curve
            .closest_point_index(pos, state.options.snap_radius, Some(drag.index));
    if candidate != drag.snap_candidate {
        if let Some(previous) = drag.snap_candidate {
            state.curve.deselect(previous);
        }
        if let Some(next) = candidate {
            state.curve.select(next);
        }
    }
    state.editor.drag = Some(DragState {
        snap_candidate: candidate,
        ..drag
    });
}

/// Beendet den Drag. Mit Snap-Kandidat rastet der Punkt auf dessen Position ein;
/// treffen dabei Start- und End-Anker aufeinander, wird zuvor das Handle am
/// Schließpunkt gespiegelt.
pub fn end_drag(state: &mut AppState) {
    let Some(drag) = state.editor.drag.take() else {
        return;
    };
    state.curve.deselect_all();

    let Some(target) = drag.snap_candidate else {
        return;
    };
    let Some(target_pos) = state.curve.point(target).map(|p| p.pos) else {
        return;
    };

    if closes_loop(state, drag.index, target) {
        if let Err(e) = state.curve.align_loop_ends(target, drag.index) {
            log::debug!("Schleifenschluss ignoriert: {}", e);
        } else {
            log::info!("Schleife geschlossen (Anker {} auf {})", drag.index, target);
        }
    }

    match state.curve.move_point(drag.index, target_pos) {
        Ok(()) => log::info!("Punkt {} auf Punkt {} eingerastet", drag.index, target),
        Err(e) => log::debug!("Einrasten ignoriert: {}", e),
    }
}

/// Bricht den Drag ab; der Punkt bleibt an seiner letzten Position.
pub fn cancel_drag(state: &mut AppState) {
    if state.editor.drag.take().is_some() {
        state.curve.deselect_all();
        log::debug!("Drag abgebrochen");
    }
}

/// Start-Anker (0) und letzter Anker treffen aufeinander.
fn closes_loop(state: &AppState, dragged: usize, target: usize) -> bool {
    match state.curve.last_anchor_index() {
        Some(last) if last > 0 => {
            (dragged == 0 && target == last) || (dragged == last && target == 0)
        }
        _ => false,
    }
}
