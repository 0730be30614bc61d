//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Schlägt ein Command fehl, werden die folgenden nicht mehr ausgeführt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kurve ===
            AppCommand::AppendPoint { pos } => handlers::editing::append_point(state, pos),
            AppCommand::DeletePoint { index } => handlers::editing::delete_point(state, index),
            AppCommand::BeginDrag { index } => handlers::editing::begin_drag(state, index),
            AppCommand::UpdateDrag { pos } => handlers::editing::update_drag(state, pos),
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::CancelDrag => handlers::editing::cancel_drag(state),
            AppCommand::SetEditMode { mode } => handlers::editing::set_edit_mode(state, mode),
            AppCommand::ClearCurve => handlers::editing::clear_curve(state),

            // === Fourier ===
            AppCommand::BuildFunction => handlers::editing::build_function(state)?,
            AppCommand::SetVectorCount { count } => {
                handlers::editing::set_vector_count(state, count)?
            }
            AppCommand::SetFrequencyRange { range } => {
                handlers::editing::set_frequency_range(state, range)?
            }

            // === Sitzung ===
            AppCommand::EnterSimulation => handlers::playback::enter_simulation(state),
            AppCommand::EnterDrawing => handlers::playback::enter_drawing(state),

            // === Wiedergabe ===
            AppCommand::Tick { delta } => handlers::playback::tick(state, delta),
            AppCommand::Play => handlers::playback::play(state),
            AppCommand::Pause => handlers::playback::pause(state),
            AppCommand::TogglePlayback => handlers::playback::toggle(state),
            AppCommand::ScrubProgress { progress } => handlers::playback::scrub(state, progress),
            AppCommand::SetSpeed { speed } => handlers::playback::set_speed(state, speed),

            // === Datei-I/O ===
            AppCommand::LoadDrawing { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveDrawing { path } => handlers::file_io::save(state, path)?,
            AppCommand::LoadPremade => handlers::file_io::load_premade(state),
            AppCommand::RenameDrawing { name } => handlers::file_io::rename(state, name),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
