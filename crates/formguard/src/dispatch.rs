// File: src/dispatch.rs
// Purpose: Per-control-kind rule tables and single-control dispatch

use tracing::trace;

use crate::control::{Control, ControlKind, ControlRef, FieldSnapshot, SiblingLookup};
use crate::error::DispatchError;
use crate::rules::{Rule, RuleOutcome};

/// Ordered rule tables per control category. Reporting order is fixed:
/// `show_first_error_only` truncation relies on it.
const TEXT_RULES: &[Rule] = &[
    Rule::Required,
    Rule::MaxLength,
    Rule::MinLength,
    Rule::Pattern,
    Rule::AlphaNum,
    Rule::Digits,
    Rule::Integer,
    Rule::Url,
    Rule::MatchesOne,
    Rule::RequiredWith,
];

const EMAIL_RULES: &[Rule] = &[
    Rule::Required,
    Rule::MaxLength,
    Rule::MinLength,
    Rule::Email,
    Rule::RequiredWith,
];

const NUMBER_RULES: &[Rule] = &[
    Rule::Required,
    Rule::Number,
    Rule::Integer,
    Rule::Max,
    Rule::Min,
    Rule::RequiredWith,
];

const CHECKBOX_RULES: &[Rule] = &[Rule::Checked];

const TEXTAREA_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength, Rule::RequiredWith];

const SELECT_RULES: &[Rule] = &[Rule::Required, Rule::MatchesOne, Rule::RequiredWith];

/// The ordered rule subset applicable to a control category.
pub fn rules_for(kind: ControlKind) -> &'static [Rule] {
    match kind {
        ControlKind::Text => TEXT_RULES,
        ControlKind::Email => EMAIL_RULES,
        ControlKind::Number => NUMBER_RULES,
        ControlKind::Checkbox => CHECKBOX_RULES,
        ControlKind::TextArea => TEXTAREA_RULES,
        ControlKind::Select => SELECT_RULES,
        ControlKind::Inert => &[],
    }
}

/// Aggregated failure result for one control across all applicable rules.
///
/// Constructed only when at least one rule reported a violation, so
/// `messages` is never empty. `control` points back into the owning form
/// for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub name: String,
    pub control: ControlRef,
    pub messages: Vec<String>,
}

impl FieldError {
    pub fn first_message(&self) -> &str {
        &self.messages[0]
    }

    /// Copy with only the first message, for `show_first_error_only`
    /// presentation.
    pub fn truncated(&self) -> FieldError {
        FieldError {
            name: self.name.clone(),
            control: self.control,
            messages: vec![self.messages[0].clone()],
        }
    }
}

/// Run every applicable rule against one control.
///
/// Disabled and readonly controls are exempt: no rule runs and the result
/// is `None`. Otherwise all violations are collected into `messages` in
/// table order — truncation to the first message is a presentation
/// decision left to the consumer.
pub fn dispatch_control(
    control: &Control,
    at: ControlRef,
    siblings: &dyn SiblingLookup,
) -> Result<Option<FieldError>, DispatchError> {
    if control.is_disabled() || control.is_readonly() {
        trace!(field = control.name(), "skipping exempt control");
        return Ok(None);
    }

    let snapshot = FieldSnapshot::of(control)?;
    let mut messages = Vec::new();
    for rule in rules_for(snapshot.kind) {
        if let RuleOutcome::Invalid(message) = rule.evaluate(&snapshot, siblings)? {
            messages.push(message);
        }
    }
    trace!(field = control.name(), violations = messages.len(), "dispatched control");

    if messages.is_empty() {
        Ok(None)
    } else {
        Ok(Some(FieldError {
            name: control.name().to_string(),
            control: at,
            messages,
        }))
    }
}
