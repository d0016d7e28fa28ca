//! One-shot entrance animations for cards and timeline items.

use crate::util::animate;
use pf_types::{Patch, Target};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceKind {
    SlideInLeft,
    SlideInRight,
    /// Project cards fade in with a small random delay so a row doesn't pop at once.
    JitteredFadeInUp,
    FadeInUp,
}

impl EntranceKind {
    /// Pick the animation from the element's class list.
    pub fn classify<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let classes: Vec<&str> = classes.into_iter().collect();
        if classes.contains(&"skill-category") {
            Self::SlideInLeft
        } else if classes.contains(&"project-card") {
            Self::JitteredFadeInUp
        } else if classes.contains(&"certification-card") {
            Self::SlideInRight
        } else {
            Self::FadeInUp
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::SlideInLeft => "animate-slideInLeft",
            Self::SlideInRight => "animate-slideInRight",
            Self::JitteredFadeInUp | Self::FadeInUp => "animate-fadeInUp",
        }
    }
}

/// Remembers which observed elements already animated.
///
/// Keys are the element's index in the observed list. The browser also
/// unobserves on first trigger; the tracker keeps the at-most-once rule even
/// if a late intersection entry is still delivered.
#[derive(Debug, Default)]
pub struct EntranceTracker {
    animated: HashSet<usize>,
    max_jitter_ms: u32,
}

impl EntranceTracker {
    pub fn new(max_jitter_ms: u32) -> Self {
        Self {
            animated: HashSet::new(),
            max_jitter_ms,
        }
    }

    /// Handle an intersection for element `key`. `random` is a sample in `[0, 1)`
    /// used only for jittered kinds. Returns `None` when nothing should happen.
    pub fn on_visible(&mut self, key: usize, kind: EntranceKind, random: f64) -> Option<Patch> {
        if !self.animated.insert(key) {
            return None;
        }
        let delay = match kind {
            EntranceKind::JitteredFadeInUp => {
                (random.clamp(0.0, 1.0) * f64::from(self.max_jitter_ms)) as u32
            }
            _ => 0,
        };
        Some(animate(Target::Current, kind.class(), delay))
    }

    pub fn has_animated(&self, key: usize) -> bool {
        self.animated.contains(&key)
    }
}
