//! Count-up animation for `.counter[data-target]` elements.
//!
//! One animation, two pacing strategies: the basic page advances in fixed
//! interval ticks, the enhanced page samples an ease-out-expo curve on every
//! animation frame. Both land exactly on the target.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CounterStrategy {
    Linear,
    EaseOutExpo,
}

pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Leading unsigned integer of `raw`, ignoring surrounding whitespace.
/// `"87"`, `" 87 "` and `"87%"` all give 87; no digits gives `None`.
pub fn leading_int(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u32,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    start: u32,
    target: u32,
    strategy: CounterStrategy,
    duration_ms: f64,
    tick_ms: f64,
    suffix: String,
}

impl CounterAnimation {
    /// `start` is whatever the element already shows (0 if not numeric).
    pub fn new(
        start: u32,
        target: u32,
        strategy: CounterStrategy,
        duration_ms: u32,
        tick_ms: u32,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            start: start.min(target),
            target,
            strategy,
            duration_ms: f64::from(duration_ms.max(1)),
            tick_ms: f64::from(tick_ms.max(1)),
            suffix: suffix.into(),
        }
    }

    pub fn strategy(&self) -> CounterStrategy {
        self.strategy
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms as u32
    }

    /// Per-tick increment for the linear strategy.
    fn step(&self) -> u32 {
        let steps = (self.duration_ms / self.tick_ms).max(1.0);
        (f64::from(self.target - self.start) / steps).ceil().max(1.0) as u32
    }

    /// Displayed frame `elapsed_ms` after the animation started.
    pub fn sample(&self, elapsed_ms: f64) -> CounterFrame {
        let elapsed = elapsed_ms.max(0.0);
        let span = self.target - self.start;
        let (value, done) = match self.strategy {
            CounterStrategy::Linear => {
                let ticks = (elapsed / self.tick_ms).floor() as u64;
                let advanced = u64::from(self.step()).saturating_mul(ticks);
                let value = (u64::from(self.start) + advanced).min(u64::from(self.target)) as u32;
                (value, value >= self.target)
            }
            CounterStrategy::EaseOutExpo => {
                let progress = (elapsed / self.duration_ms).min(1.0);
                let value = self.start + (ease_out_expo(progress) * f64::from(span)).floor() as u32;
                (value.min(self.target), progress >= 1.0)
            }
        };

        if done {
            CounterFrame {
                value: self.target,
                text: format!("{}{}", self.target, self.suffix),
                done: true,
            }
        } else {
            CounterFrame {
                value,
                text: value.to_string(),
                done: false,
            }
        }
    }
}
