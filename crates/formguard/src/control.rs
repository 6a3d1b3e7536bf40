// File: src/control.rs
// Purpose: Form controls, the ordered form collection, and field snapshots

use std::collections::BTreeMap;

use crate::error::DispatchError;

/// Dispatch category of a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Text,
    Email,
    Number,
    Checkbox,
    TextArea,
    Select,
    /// button/hidden/submit/reset inputs: never validated, never an error
    Inert,
}

impl ControlKind {
    /// Whether the control carries a checked state instead of a text value.
    pub fn is_checkbox_like(self) -> bool {
        matches!(self, ControlKind::Checkbox)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Element {
    Input(String),
    TextArea,
    Select,
}

/// One form element as seen by the engine: tag, declared type, name,
/// current value/checked state, exemption flags and its attribute set.
///
/// Built by the embedding layer (the DOM collaborator); the engine only
/// ever reads it through a [`FieldSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    element: Element,
    name: String,
    value: String,
    checked: bool,
    disabled: bool,
    readonly: bool,
    attrs: BTreeMap<String, String>,
}

impl Control {
    pub fn input(type_name: &str, name: &str) -> Self {
        Self::new(Element::Input(type_name.to_string()), name)
    }

    pub fn textarea(name: &str) -> Self {
        Self::new(Element::TextArea, name)
    }

    pub fn select(name: &str) -> Self {
        Self::new(Element::Select, name)
    }

    fn new(element: Element, name: &str) -> Self {
        Self {
            element,
            name: name.to_string(),
            value: String::new(),
            checked: false,
            disabled: false,
            readonly: false,
            attrs: BTreeMap::new(),
        }
    }

    /// Set the current value (builder style).
    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Set the checked state (builder style).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Declare an attribute. Presence-only attributes pass `""` as value.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Update the value in place (the embedding layer's "user typed" hook).
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// The control's current text value as seen by sibling lookups.
    /// Checkbox-like controls read as empty while unchecked.
    pub fn current_value(&self) -> &str {
        match self.kind() {
            Ok(kind) if kind.is_checkbox_like() && !self.checked => "",
            _ => &self.value,
        }
    }

    /// Resolve the dispatch category from tag and declared type.
    pub fn kind(&self) -> Result<ControlKind, DispatchError> {
        match &self.element {
            Element::TextArea => Ok(ControlKind::TextArea),
            Element::Select => Ok(ControlKind::Select),
            Element::Input(type_name) => match type_name.as_str() {
                // A missing type attribute defaults to a text input
                "" | "text" => Ok(ControlKind::Text),
                "email" => Ok(ControlKind::Email),
                "number" => Ok(ControlKind::Number),
                "checkbox" => Ok(ControlKind::Checkbox),
                "button" | "hidden" | "submit" | "reset" => Ok(ControlKind::Inert),
                other => Err(DispatchError::UnknownControlType {
                    type_name: other.to_string(),
                }),
            },
        }
    }
}

/// Current value of a control: text, or a checked state for
/// checkbox-like controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Checked(bool),
}

impl FieldValue<'_> {
    pub fn text(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            FieldValue::Checked(_) => "",
        }
    }

    /// Empty text, or unchecked for checkbox-like controls.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.is_empty(),
            FieldValue::Checked(checked) => !checked,
        }
    }
}

/// Read-only view of one control, taken for the duration of a single
/// dispatch and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct FieldSnapshot<'a> {
    pub name: &'a str,
    pub value: FieldValue<'a>,
    pub kind: ControlKind,
    attrs: &'a BTreeMap<String, String>,
}

impl<'a> FieldSnapshot<'a> {
    pub fn of(control: &'a Control) -> Result<Self, DispatchError> {
        let kind = control.kind()?;
        let value = if kind.is_checkbox_like() {
            FieldValue::Checked(control.checked)
        } else {
            FieldValue::Text(&control.value)
        };
        Ok(Self {
            name: &control.name,
            value,
            kind,
            attrs: &control.attrs,
        })
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }
}

/// Live "resolve sibling value by name" query handed into each dispatch.
///
/// Cross-field rules must see the values as they are at the moment of the
/// call, so implementations re-resolve on every lookup and never cache.
pub trait SiblingLookup {
    fn value_of(&self, name: &str) -> Option<&str>;
}

/// Opaque back-reference from a field error to the originating control
/// within its form, for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlRef(pub(crate) usize);

/// An ordered collection of controls (document order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    controls: Vec<Control>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, control: Control) -> ControlRef {
        self.controls.push(control);
        ControlRef(self.controls.len() - 1)
    }

    /// Append a control (builder style).
    pub fn with(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn control(&self, at: ControlRef) -> Option<&Control> {
        self.controls.get(at.0)
    }

    pub fn control_mut(&mut self, at: ControlRef) -> Option<&mut Control> {
        self.controls.get_mut(at.0)
    }

    /// First control carrying the given name, in document order.
    pub fn control_named(&self, name: &str) -> Option<ControlRef> {
        self.controls
            .iter()
            .position(|c| c.name == name)
            .map(ControlRef)
    }

    pub fn controls(&self) -> impl Iterator<Item = (ControlRef, &Control)> {
        self.controls
            .iter()
            .enumerate()
            .map(|(i, c)| (ControlRef(i), c))
    }
}

impl SiblingLookup for Form {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.name == name)
            .map(Control::current_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_resolution() {
        assert_eq!(Control::input("text", "a").kind().unwrap(), ControlKind::Text);
        assert_eq!(Control::input("", "a").kind().unwrap(), ControlKind::Text);
        assert_eq!(Control::input("email", "a").kind().unwrap(), ControlKind::Email);
        assert_eq!(Control::input("number", "a").kind().unwrap(), ControlKind::Number);
        assert_eq!(Control::input("checkbox", "a").kind().unwrap(), ControlKind::Checkbox);
        assert_eq!(Control::textarea("a").kind().unwrap(), ControlKind::TextArea);
        assert_eq!(Control::select("a").kind().unwrap(), ControlKind::Select);
        assert_eq!(Control::input("hidden", "a").kind().unwrap(), ControlKind::Inert);
        assert_eq!(Control::input("submit", "a").kind().unwrap(), ControlKind::Inert);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let err = Control::input("color", "a").kind().unwrap_err();
        assert!(err.to_string().contains("color"));
    }

    #[test]
    fn test_snapshot_of_checkbox_reads_checked_state() {
        let control = Control::input("checkbox", "terms").checked(true);
        let snapshot = FieldSnapshot::of(&control).unwrap();
        assert_eq!(snapshot.value, FieldValue::Checked(true));
        assert!(!snapshot.value.is_empty());
        assert_eq!(snapshot.value.text(), "");
    }

    #[test]
    fn test_sibling_lookup_is_live() {
        let mut form = Form::new().with(Control::input("text", "first_name").value("Ada"));
        assert_eq!(form.value_of("first_name"), Some("Ada"));

        let at = form.control_named("first_name").unwrap();
        form.control_mut(at).unwrap().set_value("");
        assert_eq!(form.value_of("first_name"), Some(""));
        assert_eq!(form.value_of("missing"), None);
    }

    #[test]
    fn test_unchecked_checkbox_reads_empty_to_siblings() {
        let form = Form::new().with(
            Control::input("checkbox", "optin").value("yes").checked(false),
        );
        assert_eq!(form.value_of("optin"), Some(""));
    }

    #[test]
    fn test_presence_only_attrs() {
        let control = Control::input("text", "a").attr("required", "");
        let snapshot = FieldSnapshot::of(&control).unwrap();
        assert!(snapshot.has_attr("required"));
        assert_eq!(snapshot.attr("required"), Some(""));
        assert!(!snapshot.has_attr("maxlength"));
    }
}
