//! Decoration classes on form field wrappers.
//!
//! The field's parent gets `focused` while the field has focus or holds a
//! value, and `has-value` whenever the field is non-empty.

use crate::util::toggle;
use pf_types::{Patch, Target};

pub const FOCUSED: &str = "focused";
pub const HAS_VALUE: &str = "has-value";

pub fn on_focus(index: usize) -> Vec<Patch> {
    vec![Patch::add_class(Target::FieldParent(index), FOCUSED)]
}

/// Blurring keeps the `focused` look while the field still has content.
pub fn on_blur(index: usize, value: &str) -> Vec<Patch> {
    if value.is_empty() {
        vec![Patch::remove_class(Target::FieldParent(index), FOCUSED)]
    } else {
        Vec::new()
    }
}

pub fn on_input(index: usize, value: &str) -> Vec<Patch> {
    vec![toggle(Target::FieldParent(index), HAS_VALUE, !value.is_empty())]
}

pub fn clear_decorations(field_count: usize) -> Vec<Patch> {
    (0..field_count)
        .flat_map(|i| {
            [
                Patch::remove_class(Target::FieldParent(i), FOCUSED),
                Patch::remove_class(Target::FieldParent(i), HAS_VALUE),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_keeps_focus_style_with_content() {
        assert!(on_blur(0, "hello").is_empty());
        assert_eq!(
            on_blur(0, ""),
            vec![Patch::remove_class(Target::FieldParent(0), FOCUSED)]
        );
    }

    #[test]
    fn input_tracks_value() {
        assert_eq!(
            on_input(2, "x"),
            vec![Patch::add_class(Target::FieldParent(2), HAS_VALUE)]
        );
        assert_eq!(
            on_input(2, ""),
            vec![Patch::remove_class(Target::FieldParent(2), HAS_VALUE)]
        );
        assert_eq!(clear_decorations(2).len(), 4);
        assert_eq!(on_focus(1)[0].target, Target::FieldParent(1));
    }
}
