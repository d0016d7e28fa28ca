//! Mobile navigation and in-page anchor scrolling.

use crate::util::toggle;
use pf_types::{Patch, Target};

const ACTIVE: &str = "active";
const MENU_OPEN: &str = "menu-open";

/// Flip the mobile menu. `was_open` is whether the nav menu carried `active`
/// before the click.
///
/// Opening also staggers the links in: each starts hidden and lifted, then
/// slides into place `index * stagger_ms` later.
pub fn toggle_menu(was_open: bool, link_count: usize, stagger_ms: u32) -> Vec<Patch> {
    let open = !was_open;
    let mut patches = vec![
        toggle(Target::MobileToggle, ACTIVE, open),
        toggle(Target::NavMenu, ACTIVE, open),
        toggle(Target::Body, MENU_OPEN, open),
    ];
    if open {
        for i in 0..link_count {
            let link = Target::NavLink(i);
            let at = i as u32 * stagger_ms;
            patches.push(Patch::style(link, "opacity", "0"));
            patches.push(Patch::style(link, "transform", "translateY(-20px)"));
            patches.push(Patch::style(link, "transition", "all 0.3s ease").after(at));
            patches.push(Patch::style(link, "opacity", "1").after(at));
            patches.push(Patch::style(link, "transform", "translateY(0)").after(at));
        }
    }
    patches
}

pub fn close_menu() -> Vec<Patch> {
    vec![
        Patch::remove_class(Target::MobileToggle, ACTIVE),
        Patch::remove_class(Target::NavMenu, ACTIVE),
        Patch::remove_class(Target::Body, MENU_OPEN),
    ]
}

/// A document click closes the menu unless it landed inside the menu or on its toggle.
pub fn click_dismisses_menu(inside_menu: bool, inside_toggle: bool) -> bool {
    !inside_menu && !inside_toggle
}

/// Selector for an in-page anchor `href`. A bare `#` has no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Absolute scroll offset that brings a target just below the fixed header.
pub fn scroll_target_top(rect_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    rect_top + page_y_offset - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_types::PatchOp;

    #[test]
    fn opening_activates_and_staggers_links() {
        let patches = toggle_menu(false, 3, 100);
        assert!(patches.contains(&Patch::add_class(Target::NavMenu, "active")));
        assert!(patches.contains(&Patch::add_class(Target::Body, "menu-open")));

        let reveal_delays: Vec<u32> = patches
            .iter()
            .filter(|p| {
                matches!(&p.op, PatchOp::SetStyle { property, value } if property == "opacity" && value == "1")
            })
            .map(|p| p.delay_ms)
            .collect();
        assert_eq!(reveal_delays, vec![0, 100, 200]);
    }

    #[test]
    fn closing_via_toggle_skips_link_animation() {
        let patches = toggle_menu(true, 4, 100);
        assert_eq!(patches.len(), 3);
        assert!(patches.contains(&Patch::remove_class(Target::MobileToggle, "active")));
    }

    #[test]
    fn outside_click_rule() {
        assert!(click_dismisses_menu(false, false));
        assert!(!click_dismisses_menu(true, false));
        assert!(!click_dismisses_menu(false, true));
        assert_eq!(close_menu().len(), 3);
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_selector("#projects"), Some("#projects"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/about"), None);
        assert_eq!(scroll_target_top(400.0, 1200.0, 80.0), 1520.0);
    }
}
