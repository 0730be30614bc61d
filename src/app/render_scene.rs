//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, ScenePoint};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;

    let points = state
        .curve
        .points()
        .iter()
        .map(|p| ScenePoint {
            pos: p.pos,
            is_control_point: p.is_control_point,
            selected: p.selected,
        })
        .collect();

    let function_outline = match state.function.as_deref() {
        Some(function) if options.show_function => function
            .outline(options.function_drawing_precision)
            .unwrap_or_else(|e| {
                log::debug!("Kein Funktions-Umriss: {}", e);
                Vec::new()
            }),
        _ => Vec::new(),
    };

    let circle_radii = match state.function.as_deref() {
        Some(function) if options.show_circles => {
            function.phasors().iter().map(|p| p.radius()).collect()
        }
        _ => Vec::new(),
    };

    let phasor_chain = if options.show_vectors {
        state.playback.chain().to_vec()
    } else {
        Vec::new()
    };

    RenderScene {
        mode: state.mode,
        points,
        segments: state.curve.segments().collect(),
        degenerate: state.curve.is_degenerate(),
        function_outline,
        phasor_chain,
        circle_radii,
        trace: state.playback.trace().to_vec(),
        progress: state.playback.progress(),
        canvas_size: options.canvas_size,
        options: options.clone(),
    }
}
