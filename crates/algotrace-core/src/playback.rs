//! Playback cursor over a finished step list.
//!
//! Tracers return every step at once; navigation belongs to the caller.
//! [`Playback`] is the cursor a playground keeps: the steps, the index being
//! shown, whether auto-play is on, and the delay between ticks. It never
//! touches the steps themselves.
//!
//! Lifecycle: `Paused -> Playing -> (Paused | at end, Paused)`. The index is
//! always within `[0, len - 1]` for a non-empty list.

use serde::{Deserialize, Serialize};

/// Default delay between automatic steps, in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playback<S> {
    steps: Vec<S>,
    current: usize,
    playing: bool,
    speed_ms: u64,
}

impl<S> Playback<S> {
    pub fn new(steps: Vec<S>, speed_ms: u64) -> Self {
        Playback {
            steps,
            current: 0,
            playing: false,
            speed_ms,
        }
    }

    /// The step being shown, `None` for an empty trace.
    pub fn current(&self) -> Option<&S> {
        self.steps.get(self.current)
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn set_speed_ms(&mut self, speed_ms: u64) {
        self.speed_ms = speed_ms;
    }

    pub fn is_at_end(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    /// Moves one step forward. Returns `false` if already at the last step.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves one step back. Returns `false` if already at the first step.
    pub fn step_back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) {
        self.current = index.min(self.steps.len().saturating_sub(1));
    }

    /// Back to the first step, paused.
    pub fn reset(&mut self) {
        self.current = 0;
        self.playing = false;
    }

    /// Starts auto-play. Has no effect on an empty trace or at the last step.
    pub fn play(&mut self) {
        self.playing = !self.is_at_end();
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// One timer tick: advances while playing and pauses on the last step.
    /// Returns the step now shown if the cursor moved.
    pub fn tick(&mut self) -> Option<&S> {
        if !self.playing {
            return None;
        }
        let moved = self.step_forward();
        if self.is_at_end() {
            self.playing = false;
        }
        if moved {
            self.current()
        } else {
            None
        }
    }
}
