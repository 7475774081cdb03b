//! Dynamic content controller: a region swapped in after a simulated delay

use rand::Rng;
use std::time::{Duration, Instant};

/// Simulated network latency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPolicy {
    Fixed(Duration),
    /// Uniform pick in `[min, max]` per trigger
    Randomized { min: Duration, max: Duration },
}

impl DelayPolicy {
    pub fn pick(&self) -> Duration {
        match *self {
            Self::Fixed(delay) => delay,
            Self::Randomized { min, max } if max > min => {
                let (lo, hi) = (min.as_millis() as u64, max.as_millis() as u64);
                Duration::from_millis(rand::thread_rng().gen_range(lo..=hi))
            }
            Self::Randomized { min, .. } => min,
        }
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::Fixed(Duration::from_millis(2000))
    }
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading {
        started: Instant,
        delay: Duration,
    },
    Loaded,
}

/// `idle -> loading -> loaded` state machine with at most one simulated
/// request in flight.
#[derive(Debug, Clone, Default)]
pub struct DynamicContent {
    policy: DelayPolicy,
    phase: LoadPhase,
    completed_loads: u32,
}

impl DynamicContent {
    pub fn new(policy: DelayPolicy) -> Self {
        Self {
            policy,
            phase: LoadPhase::Idle,
            completed_loads: 0,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Loaded
    }

    /// Number of `loading -> loaded` transitions so far
    pub fn completed_loads(&self) -> u32 {
        self.completed_loads
    }

    /// Start a simulated request.
    ///
    /// Returns false when one is already in flight; the pending completion
    /// still fires once. From `Loaded` the cycle restarts.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.is_loading() {
            tracing::debug!("Load already in flight, ignoring trigger");
            return false;
        }
        let delay = self.policy.pick();
        tracing::debug!("Simulated load started, delay={delay:?}");
        self.phase = LoadPhase::Loading {
            started: now,
            delay,
        };
        true
    }

    /// Advance the timer. Returns true exactly once per load, when the
    /// delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            LoadPhase::Loading { started, delay } if now.duration_since(started) >= delay => {
                self.phase = LoadPhase::Loaded;
                self.completed_loads += 1;
                tracing::debug!("Simulated load completed");
                true
            }
            _ => false,
        }
    }

    /// Back to idle; a pending completion is dropped
    pub fn reset(&mut self) {
        self.phase = LoadPhase::Idle;
    }

    /// Eased fraction of the delay elapsed, for the loading gauge
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            LoadPhase::Idle => 0.0,
            LoadPhase::Loaded => 1.0,
            LoadPhase::Loading { started, delay } => {
                if delay.is_zero() {
                    return 1.0;
                }
                let raw = now.duration_since(started).as_secs_f32() / delay.as_secs_f32();
                simple_easing::cubic_out(raw.clamp(0.0, 1.0))
            }
        }
    }
}
