//! Pointer-following cursor for wide viewports.

use pf_types::{Patch, Target};

pub const CURSOR_CLASS: &str = "custom-cursor";
const CURSOR_SIZE: f64 = 20.0;
const VISIBLE_OPACITY: &str = "0.7";

/// Inline style for the cursor element created at startup.
pub const CURSOR_CSS: &str = "position: fixed; width: 20px; height: 20px; \
     background: var(--primary-color); border-radius: 50%; pointer-events: none; \
     z-index: 9999; transition: all 0.1s ease; opacity: 0;";

pub fn enabled(viewport_width: f64, min_width: f64) -> bool {
    viewport_width > min_width
}

/// Center the cursor on the pointer.
pub fn on_move(client_x: f64, client_y: f64) -> Vec<Patch> {
    let half = CURSOR_SIZE / 2.0;
    vec![
        Patch::style(Target::Cursor, "left", format!("{}px", client_x - half)),
        Patch::style(Target::Cursor, "top", format!("{}px", client_y - half)),
        Patch::style(Target::Cursor, "opacity", VISIBLE_OPACITY),
    ]
}

/// Pointer entered or left the document.
pub fn on_document_pointer(inside: bool) -> Patch {
    Patch::style(
        Target::Cursor,
        "opacity",
        if inside { VISIBLE_OPACITY } else { "0" },
    )
}

/// Pointer entered or left an interactive element.
pub fn on_interactive_hover(hovering: bool) -> Vec<Patch> {
    let (scale, color) = if hovering {
        ("scale(1.5)", "var(--secondary-color)")
    } else {
        ("scale(1)", "var(--primary-color)")
    };
    vec![
        Patch::style(Target::Cursor, "transform", scale),
        Patch::style(Target::Cursor, "background", color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_only() {
        assert!(!enabled(768.0, 768.0));
        assert!(enabled(769.0, 768.0));
    }

    #[test]
    fn follows_pointer_centered() {
        let patches = on_move(100.0, 50.5);
        assert_eq!(patches[0], Patch::style(Target::Cursor, "left", "90px"));
        assert_eq!(patches[1], Patch::style(Target::Cursor, "top", "40.5px"));
    }

    #[test]
    fn hover_scales_and_recolors() {
        let on = on_interactive_hover(true);
        assert_eq!(on[0], Patch::style(Target::Cursor, "transform", "scale(1.5)"));
        let off = on_interactive_hover(false);
        assert_eq!(off[1], Patch::style(Target::Cursor, "background", "var(--primary-color)"));
        assert_eq!(on_document_pointer(false), Patch::style(Target::Cursor, "opacity", "0"));
    }
}
