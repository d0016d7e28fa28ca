//! Projection of [`FormState`] onto the submit button and status region.
//!
//! The label, icon, disabled flag, marker class and status region are all
//! derived from the state here, so they cannot drift apart.

use super::fields;
use super::machine::FormState;
use crate::util::{hide, show};
use pf_types::{Patch, Target, Variant};

pub const LABEL_IDLE: &str = "Send Message";
pub const LABEL_SENDING: &str = "Sending...";
pub const LABEL_SUCCESS: &str = "Message Sent!";
pub const LABEL_ERROR: &str = "Try Again";

const ICON_SEND: &str = r#"<i class="fas fa-paper-plane"></i>"#;
const ICON_SPINNER: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;
const ICON_CHECK: &str = r#"<i class="fas fa-check"></i>"#;
const ICON_WARNING: &str = r#"<i class="fas fa-exclamation-triangle"></i>"#;

pub const STATUS_SUCCESS_HTML: &str = r#"<i class="fas fa-check-circle"></i> Thank you! Your message has been sent successfully. I'll get back to you soon!"#;
pub const STATUS_ERROR_HTML: &str = r#"<i class="fas fa-times-circle"></i> Sorry, there was an error sending your message. Please try again or contact me directly."#;

const MARKERS: [&str; 3] = ["loading", "success", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub icon: &'static str,
    pub disabled: bool,
    /// Marker class, enhanced variant only.
    pub marker: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusView {
    Hidden,
    Shown {
        class: &'static str,
        html: &'static str,
    },
}

pub fn button(state: FormState) -> ButtonView {
    match state {
        FormState::Idle => ButtonView {
            label: LABEL_IDLE,
            icon: ICON_SEND,
            disabled: false,
            marker: None,
        },
        FormState::Sending => ButtonView {
            label: LABEL_SENDING,
            icon: ICON_SPINNER,
            disabled: true,
            marker: Some("loading"),
        },
        FormState::Success => ButtonView {
            label: LABEL_SUCCESS,
            icon: ICON_CHECK,
            disabled: true,
            marker: Some("success"),
        },
        FormState::Error => ButtonView {
            label: LABEL_ERROR,
            icon: ICON_WARNING,
            disabled: true,
            marker: Some("error"),
        },
    }
}

pub fn status(state: FormState) -> StatusView {
    match state {
        FormState::Idle | FormState::Sending => StatusView::Hidden,
        FormState::Success => StatusView::Shown {
            class: "form-status success",
            html: STATUS_SUCCESS_HTML,
        },
        FormState::Error => StatusView::Shown {
            class: "form-status error",
            html: STATUS_ERROR_HTML,
        },
    }
}

/// Full render of `state`.
pub fn render(state: FormState, variant: Variant) -> Vec<Patch> {
    let b = button(state);
    let mut patches = vec![
        Patch::text(Target::ButtonLabel, b.label),
        Patch::html(Target::ButtonIcon, b.icon),
        Patch::disabled(Target::SubmitButton, b.disabled),
    ];

    if variant == Variant::Enhanced {
        for marker in MARKERS {
            if Some(marker) != b.marker {
                patches.push(Patch::remove_class(Target::SubmitButton, marker));
            }
        }
        if let Some(marker) = b.marker {
            patches.push(Patch::add_class(Target::SubmitButton, marker));
        }
    }

    match status(state) {
        StatusView::Hidden => patches.push(hide(Target::FormStatus)),
        StatusView::Shown { class, html } => {
            patches.push(Patch::class_name(Target::FormStatus, class));
            patches.push(Patch::html(Target::FormStatus, html));
            patches.push(show(Target::FormStatus));
            if variant == Variant::Enhanced {
                patches.push(Patch::style(Target::FormStatus, "animation", "fadeInUp 0.5s ease"));
            }
        }
    }
    patches
}

/// Patches for moving `from` → `to`. Reverting from `Success` also wipes the
/// fields and their decoration classes.
pub fn transition(from: FormState, to: FormState, variant: Variant, field_count: usize) -> Vec<Patch> {
    let mut patches = render(to, variant);
    if from == FormState::Success && to == FormState::Idle {
        patches.push(Patch::new(Target::Form, pf_types::PatchOp::ResetForm));
        patches.extend(fields::clear_decorations(field_count));
    }
    patches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_types::PatchOp;

    fn has(patches: &[Patch], wanted: &Patch) -> bool {
        patches.iter().any(|p| p == wanted)
    }

    #[test]
    fn sending_disables_and_hides_status() {
        let patches = render(FormState::Sending, Variant::Enhanced);
        assert!(has(&patches, &Patch::text(Target::ButtonLabel, "Sending...")));
        assert!(has(&patches, &Patch::disabled(Target::SubmitButton, true)));
        assert!(has(&patches, &Patch::add_class(Target::SubmitButton, "loading")));
        assert!(has(&patches, &hide(Target::FormStatus)));
    }

    #[test]
    fn basic_variant_has_no_marker_classes() {
        let patches = render(FormState::Error, Variant::Basic);
        assert!(!patches.iter().any(|p| matches!(
            &p.op,
            PatchOp::AddClass(_) | PatchOp::RemoveClass(_)
        )));
        assert!(!patches.iter().any(|p| matches!(
            &p.op,
            PatchOp::SetStyle { property, .. } if property == "animation"
        )));
    }

    #[test]
    fn enhanced_marker_tracks_label() {
        for state in [FormState::Idle, FormState::Sending, FormState::Success, FormState::Error] {
            let b = button(state);
            let patches = render(state, Variant::Enhanced);
            let added: Vec<&str> = patches
                .iter()
                .filter_map(|p| match &p.op {
                    PatchOp::AddClass(c) => Some(c.as_str()),
                    _ => None,
                })
                .collect();
            assert_eq!(added, b.marker.into_iter().collect::<Vec<_>>(), "{state:?}");
        }
    }

    #[test]
    fn failure_views_share_message_and_icon() {
        assert_eq!(button(FormState::Error).icon, ICON_WARNING);
        assert!(STATUS_ERROR_HTML.contains("error sending"));
        assert!(STATUS_SUCCESS_HTML.contains("sent successfully"));
    }

    #[test]
    fn only_success_revert_resets_fields() {
        let reset = Patch::new(Target::Form, PatchOp::ResetForm);
        assert!(has(
            &transition(FormState::Success, FormState::Idle, Variant::Enhanced, 3),
            &reset
        ));
        assert!(!has(
            &transition(FormState::Error, FormState::Idle, Variant::Enhanced, 3),
            &reset
        ));
    }
}
