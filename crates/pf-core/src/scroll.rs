//! Scroll-driven effects: navbar style, progress bar, hero parallax.

use crate::util::toggle;
use pf_types::{Patch, Target};
use std::cell::Cell;

/// Inline style for the progress bar injected at startup.
pub const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
     background: linear-gradient(90deg, var(--primary-color), var(--secondary-color)); \
     z-index: 9999; transition: width 0.3s ease;";

pub const PROGRESS_BAR_CLASS: &str = "scroll-progress";

/// Scroll metrics sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollSnapshot {
    /// Fraction of the scrollable range covered, clamped to `[0, 1]`.
    /// Pages shorter than the viewport report 0.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / range).clamp(0.0, 1.0)
    }
}

pub fn navbar_scrolled(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// Per-frame update for the navbar class and progress bar width.
pub fn frame_update(snapshot: &ScrollSnapshot, navbar_offset: f64) -> Vec<Patch> {
    vec![
        toggle(
            Target::Navbar,
            "scrolled",
            navbar_scrolled(snapshot.scroll_y, navbar_offset),
        ),
        Patch::style(
            Target::ProgressBar,
            "width",
            format!("{}%", snapshot.progress() * 100.0),
        ),
    ]
}

/// Hero offset while the hero is still on screen; `None` once scrolled past it.
pub fn parallax(scroll_y: f64, hero_height: f64, rate: f64) -> Option<Patch> {
    (scroll_y < hero_height).then(|| {
        Patch::style(
            Target::Hero,
            "transform",
            format!("translateY({}px)", scroll_y * rate),
        )
    })
}

/// Collapses bursts of scroll events into one update per animation frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: Cell<bool>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the caller should schedule a frame; false if one is already queued.
    pub fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Call from the frame callback once the update ran.
    pub fn complete(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_types::PatchOp;

    fn snapshot(scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            document_height: 3000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn navbar_threshold_boundary() {
        for (y, expected) in [(49.0, false), (50.0, false), (51.0, true)] {
            let patches = frame_update(&snapshot(y), 50.0);
            let op = if expected {
                PatchOp::AddClass("scrolled".into())
            } else {
                PatchOp::RemoveClass("scrolled".into())
            };
            assert_eq!(patches[0].op, op, "scroll_y = {y}");
        }
    }

    #[test]
    fn progress_is_fraction_of_scrollable_range() {
        assert_eq!(snapshot(0.0).progress(), 0.0);
        assert_eq!(snapshot(500.0).progress(), 0.25);
        assert_eq!(snapshot(2000.0).progress(), 1.0);
        // overscroll bounce
        assert_eq!(snapshot(2100.0).progress(), 1.0);
        let short = ScrollSnapshot {
            scroll_y: 0.0,
            document_height: 800.0,
            viewport_height: 1000.0,
        };
        assert_eq!(short.progress(), 0.0);

        let patches = frame_update(&snapshot(1000.0), 50.0);
        assert_eq!(patches[1], Patch::style(Target::ProgressBar, "width", "50%"));
    }

    #[test]
    fn parallax_stops_past_hero() {
        assert_eq!(
            parallax(200.0, 600.0, -0.5),
            Some(Patch::style(Target::Hero, "transform", "translateY(-100px)"))
        );
        assert_eq!(parallax(600.0, 600.0, -0.5), None);
    }

    #[test]
    fn throttle_allows_one_frame_at_a_time() {
        let throttle = FrameThrottle::new();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());
        throttle.complete();
        assert!(throttle.request());
    }
}
