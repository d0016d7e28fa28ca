use serde::{Deserialize, Serialize};

/// Which flavour of the page script is running.
///
/// `Basic` keeps plain label/icon swaps and the linear counter; `Enhanced`
/// adds button marker classes, the status fade-in and the eased counter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Basic,
    #[default]
    Enhanced,
}

/// Logical DOM node a patch applies to.
///
/// The browser layer resolves each target against the handles it bound at
/// startup; an unresolved target is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Body,
    MobileToggle,
    NavMenu,
    NavLink(usize),
    Navbar,
    ProgressBar,
    Hero,
    Form,
    SubmitButton,
    ButtonLabel,
    ButtonIcon,
    FormStatus,
    /// Parent element of the n-th form field.
    FieldParent(usize),
    Cursor,
    /// The element the triggering event is about (observed card, counter, ...).
    Current,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    AddClass(String),
    RemoveClass(String),
    /// Replace the whole `class` attribute.
    SetClassName(String),
    SetStyle { property: String, value: String },
    SetText(String),
    SetInnerHtml(String),
    SetDisabled(bool),
    /// Reset every field of a form element to its default value.
    ResetForm,
}

/// One declarative DOM mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub target: Target,
    pub op: PatchOp,
    /// Milliseconds to wait before applying; zero applies in the current turn.
    pub delay_ms: u32,
}

impl Patch {
    pub fn new(target: Target, op: PatchOp) -> Self {
        Self {
            target,
            op,
            delay_ms: 0,
        }
    }

    pub fn add_class(target: Target, class: impl Into<String>) -> Self {
        Self::new(target, PatchOp::AddClass(class.into()))
    }

    pub fn remove_class(target: Target, class: impl Into<String>) -> Self {
        Self::new(target, PatchOp::RemoveClass(class.into()))
    }

    pub fn class_name(target: Target, class: impl Into<String>) -> Self {
        Self::new(target, PatchOp::SetClassName(class.into()))
    }

    pub fn style(target: Target, property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            target,
            PatchOp::SetStyle {
                property: property.into(),
                value: value.into(),
            },
        )
    }

    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self::new(target, PatchOp::SetText(text.into()))
    }

    pub fn html(target: Target, html: impl Into<String>) -> Self {
        Self::new(target, PatchOp::SetInnerHtml(html.into()))
    }

    pub fn disabled(target: Target, disabled: bool) -> Self {
        Self::new(target, PatchOp::SetDisabled(disabled))
    }

    /// Defer this patch by `delay_ms`.
    pub fn after(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// Anything that can carry out patches: the live document, or a recorder in tests.
pub trait PatchSink {
    fn apply(&self, patches: &[Patch]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_reads_from_config_json() {
        let v: Variant = serde_json::from_str(r#""basic""#).unwrap();
        assert_eq!(v, Variant::Basic);
        assert_eq!(serde_json::to_string(&Variant::Enhanced).unwrap(), r#""enhanced""#);
    }

    #[test]
    fn after_defers_without_touching_the_op() {
        let p = Patch::add_class(Target::NavLink(2), "active").after(200);
        assert_eq!(p.delay_ms, 200);
        assert_eq!(p.op, PatchOp::AddClass("active".into()));
        assert_eq!(Patch::text(Target::ButtonLabel, "x").delay_ms, 0);
    }
}
