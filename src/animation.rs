//! Linear progress driver for the reveal animation.

use d3rs::scale::{LinearScale, Scale as D3Scale};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Length of one reveal animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(3000);

/// Drives `progress` from 0.0 to 1.0 over [`ANIMATION_DURATION`].
///
/// Every run is identified by a generation. Restarting or cancelling bumps
/// the generation, so ticks scheduled for an earlier run become no-ops and at
/// most one run ever updates `progress`.
#[derive(Clone)]
pub struct Animator {
    scale: LinearScale,
    started_at: Option<Instant>,
    progress: f32,
    generation: u64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        let duration_ms = ANIMATION_DURATION.as_secs_f64() * 1000.0;
        Self {
            scale: LinearScale::new().domain(0.0, duration_ms).range(0.0, 1.0),
            started_at: None,
            progress: 0.0,
            generation: 0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Discards the current run, if any, and starts a new one at progress 0.
    pub fn restart(&mut self, now: Instant) -> u64 {
        if self.is_running() {
            debug!(generation = self.generation, progress = self.progress, "cancelling animation");
        }
        self.generation = self.generation.wrapping_add(1);
        self.started_at = Some(now);
        self.progress = 0.0;
        debug!(generation = self.generation, "animation started");
        self.generation
    }

    /// Stops the current run where it is.
    pub fn cancel(&mut self) {
        if self.started_at.take().is_some() {
            debug!(generation = self.generation, progress = self.progress, "animation cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advances the run identified by `generation` to `now`.
    ///
    /// Returns the new progress, or `None` if that run is no longer the active
    /// one. The run ends on its own once progress reaches 1.0.
    pub fn tick(&mut self, generation: u64, now: Instant) -> Option<f32> {
        if generation != self.generation {
            return None;
        }
        let started_at = self.started_at?;

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= ANIMATION_DURATION {
            self.progress = 1.0;
            self.started_at = None;
            debug!(generation, "animation finished");
        } else {
            let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
            self.progress = self.scale.scale(elapsed_ms).clamp(0.0, 1.0) as f32;
        }

        trace!(generation, progress = self.progress, "animation tick");
        Some(self.progress)
    }
}
