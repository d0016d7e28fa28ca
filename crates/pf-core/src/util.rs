//! Small patch builders shared by the components.

use pf_types::{Patch, Target};

/// Add `class` to `target` after `delay_ms`.
pub fn animate(target: Target, class: &str, delay_ms: u32) -> Patch {
    Patch::add_class(target, class).after(delay_ms)
}

pub fn show(target: Target) -> Patch {
    Patch::style(target, "display", "block")
}

pub fn hide(target: Target) -> Patch {
    Patch::style(target, "display", "none")
}

/// Add or remove `class` depending on `on`.
pub fn toggle(target: Target, class: &str, on: bool) -> Patch {
    if on {
        Patch::add_class(target, class)
    } else {
        Patch::remove_class(target, class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_types::PatchOp;

    #[test]
    fn animate_defers_class() {
        let p = animate(Target::Current, "animate-fadeInUp", 120);
        assert_eq!(p.delay_ms, 120);
        assert_eq!(p.op, PatchOp::AddClass("animate-fadeInUp".into()));
    }

    #[test]
    fn toggle_picks_direction() {
        assert_eq!(
            toggle(Target::Navbar, "scrolled", false).op,
            PatchOp::RemoveClass("scrolled".into())
        );
        assert_eq!(hide(Target::FormStatus).delay_ms, 0);
    }
}
