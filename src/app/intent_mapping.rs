//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasPressed { pos } => {
            if state.is_simulating() {
                return vec![];
            }
            let picked = state
                .curve
                .closest_point_index(pos, state.options.pick_radius, None);

            match (state.editor.edit_mode, picked) {
                (EditMode::Delete, Some(index)) => vec![AppCommand::DeletePoint { index }],
                (EditMode::Delete, None) => vec![],
                (EditMode::Add, Some(index)) => vec![AppCommand::BeginDrag { index }],
                (EditMode::Add, None) => vec![AppCommand::AppendPoint { pos }],
            }
        }
        AppIntent::CanvasDragged { pos } => {
            if state.editor.is_dragging() {
                vec![AppCommand::UpdateDrag { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::CanvasReleased => {
            if state.editor.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::CanvasLeft => {
            if state.editor.is_dragging() {
                vec![AppCommand::CancelDrag]
            } else {
                vec![]
            }
        }
        AppIntent::EditModeChanged { mode } => vec![AppCommand::SetEditMode { mode }],
        AppIntent::ClearCurveRequested => vec![AppCommand::ClearCurve],

        AppIntent::FinishDrawingRequested => start_simulation(state),
        AppIntent::BackToDrawingRequested => vec![AppCommand::EnterDrawing],

        AppIntent::FrameTick { delta } => vec![AppCommand::Tick { delta }],
        AppIntent::PlayRequested => vec![AppCommand::Play],
        AppIntent::PauseRequested => vec![AppCommand::Pause],
        AppIntent::TogglePlaybackRequested => vec![AppCommand::TogglePlayback],
        AppIntent::ProgressScrubbed { progress } => vec![AppCommand::ScrubProgress { progress }],
        AppIntent::SpeedChanged { speed } => vec![AppCommand::SetSpeed { speed }],
        AppIntent::VectorCountChanged { count } => vec![AppCommand::SetVectorCount { count }],
        AppIntent::FrequencyRangeChanged { range } => {
            vec![AppCommand::SetFrequencyRange { range }]
        }

        AppIntent::DrawingFileSelected { path } => vec![AppCommand::LoadDrawing { path }],
        AppIntent::SaveDrawingPathSelected { path } => {
            let mut commands = vec![AppCommand::SaveDrawing { path }];
            commands.extend(start_simulation(state));
            commands
        }
        AppIntent::PremadeDrawingRequested => vec![AppCommand::LoadPremade],
        AppIntent::DrawingRenamed { name } => vec![AppCommand::RenameDrawing { name }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Funktion bauen, Zeiger für den gemerkten Bereich berechnen und die
/// Wiedergabe starten.
fn start_simulation(state: &AppState) -> Vec<AppCommand> {
    vec![
        AppCommand::BuildFunction,
        AppCommand::SetFrequencyRange {
            range: state.frequency_range,
        },
        AppCommand::EnterSimulation,
        AppCommand::Play,
    ]
}
