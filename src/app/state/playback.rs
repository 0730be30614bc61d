//! Wiedergabe der Fourier-Reihe: Fortschritt, Zeiger-Kette und Spur.

use crate::core::{phasor_chain, phasor_sum, Phasor, Vector2};

/// Wiedergabe läuft oder steht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Running,
}

/// Rekonstruiert Kurvenpunkte aus Zeigern entlang einer Zeitachse `[0, 1)`.
#[derive(Debug, Clone, Default)]
pub struct Reconstruction {
    state: PlaybackState,
    /// Fortschritt in [0, 1)
    progress: f64,
    /// Fortschritt pro Sekunde
    speed: f64,
    /// Gezeichnete Spur seit dem letzten Umlauf
    trace: Vec<Vector2>,
    /// Zwischensummen der Zeiger zum aktuellen Fortschritt
    chain: Vec<Vector2>,
}

/// Größter Fortschritt unterhalb von 1.
const MAX_PROGRESS: f64 = 1.0 - f64::EPSILON;

/// Obergrenze der Spurpunkte beim Neuaufbau per `scrub`.
pub const MAX_SCRUB_TRACE_POINTS: usize = 10_000;

impl Reconstruction {
    pub fn new(speed: f64) -> Self {
        Self {
            speed: speed.max(0.0),
            ..Self::default()
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn trace(&self) -> &[Vector2] {
        &self.trace
    }

    pub fn chain(&self) -> &[Vector2] {
        &self.chain
    }

    /// Letzter rekonstruierter Punkt.
    pub fn tip(&self) -> Option<Vector2> {
        self.chain.last().copied()
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Running;
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlaybackState::Running => PlaybackState::Stopped,
            PlaybackState::Stopped => PlaybackState::Running,
        };
    }

    /// Negative Geschwindigkeiten werden auf 0 begrenzt.
    pub fn set_speed(&mut self, speed: f64) {
        if speed < 0.0 {
            log::warn!("Negative Geschwindigkeit {} wird auf 0 begrenzt", speed);
        }
        self.speed = speed.max(0.0);
    }

    /// Stoppt und setzt Fortschritt, Spur und Kette zurück.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Stopped;
        self.progress = 0.0;
        self.trace.clear();
        self.chain.clear();
    }

    /// Leert die Spur; Fortschritt und Zustand bleiben.
    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    /// Ein Frame: Fortschritt weiterschalten, Zeiger summieren, Spur verlängern.
    ///
    /// Beim Erreichen von 1 springt der Fortschritt auf 0 und die Spur wird geleert.
    pub fn tick(&mut self, delta: f64, phasors: &[Phasor]) -> Vector2 {
        if self.is_running() {
            self.progress += self.speed * delta.max(0.0);
            if self.progress >= 1.0 {
                self.progress = 0.0;
                self.trace.clear();
            }
        }

        self.chain = phasor_chain(phasors, self.progress);
        let tip = self.chain.last().copied().unwrap_or(Vector2::ZERO);
        self.trace.push(tip);
        tip
    }

    /// Springt zu `progress` (pausiert) und baut die Spur von 0 bis dorthin
    /// in Schritten von `speed / 10` neu auf.
    ///
    /// Würde das mehr als `MAX_SCRUB_TRACE_POINTS` Punkte ergeben, wird der
    /// Schritt so vergrößert, dass die Grenze eingehalten wird.
    pub fn scrub(&mut self, progress: f64, phasors: &[Phasor]) {
        self.pause();
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, MAX_PROGRESS)
        };

        self.trace.clear();
        let mut step = self.speed / 10.0;
        if step > 0.0 {
            let max_intervals = (MAX_SCRUB_TRACE_POINTS - 1) as f64;
            if self.progress / step > max_intervals {
                log::debug!(
                    "Spur-Neuaufbau auf {} Punkte begrenzt",
                    MAX_SCRUB_TRACE_POINTS
                );
                step = self.progress / max_intervals;
            }
            let count =
                ((self.progress / step).floor() as usize + 1).min(MAX_SCRUB_TRACE_POINTS);
            self.trace
                .extend((0..count).map(|i| phasor_sum(phasors, i as f64 * step)));
        } else {
            self.trace.push(phasor_sum(phasors, self.progress));
        }

        self.chain = phasor_chain(phasors, self.progress);
    }
}
