// File: src/rules.rs
// Purpose: The closed rule set — trigger conditions, violation predicates
//          and default messages, one variant per constraint kind

use formguard_rules::{bounds, collection, format};
use regex::Regex;

use crate::control::{FieldSnapshot, SiblingLookup};
use crate::error::DispatchError;
use crate::messages;

/// Result of evaluating one rule against one field snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Valid,
    Invalid(String),
}

impl RuleOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, RuleOutcome::Valid)
    }
}

/// One validation constraint.
///
/// Each variant knows its trigger (which attribute or declared type
/// activates it), its violation predicate and its default message.
/// A rule whose trigger is absent evaluates to `Valid` — it is never
/// skipped in a way that changes the shape of the outcome list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    MaxLength,
    MinLength,
    Min,
    Max,
    Email,
    Number,
    Integer,
    Digits,
    AlphaNum,
    Url,
    Pattern,
    MatchesOne,
    Checked,
    RequiredWith,
}

impl Rule {
    /// Identifier used for message-override attributes
    /// (`data-v-{key}-msg`) and marker attributes where applicable.
    pub fn key(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::MaxLength => "maxlength",
            Rule::MinLength => "minlength",
            Rule::Min => "min",
            Rule::Max => "max",
            Rule::Email => "email",
            Rule::Number => "number",
            Rule::Integer => "integer",
            Rule::Digits => "digits",
            Rule::AlphaNum => "alphanum",
            Rule::Url => "url",
            Rule::Pattern => "pattern",
            Rule::MatchesOne => "in",
            Rule::Checked => "checked",
            Rule::RequiredWith => "required-with",
        }
    }

    /// Evaluate this rule against a field snapshot.
    ///
    /// Sibling values for cross-field rules come from `siblings`, resolved
    /// live at call time. Only a malformed `pattern` attribute is a hard
    /// failure; every not-applicable case is `Valid`.
    pub fn evaluate(
        self,
        field: &FieldSnapshot<'_>,
        siblings: &dyn SiblingLookup,
    ) -> Result<RuleOutcome, DispatchError> {
        let outcome = match self {
            Rule::Required => {
                if field.has_attr("required") && field.value.is_empty() {
                    self.fail(field, "This field is required".to_string())
                } else {
                    RuleOutcome::Valid
                }
            }

            Rule::MaxLength => match parsed_attr::<usize>(field, "maxlength") {
                Some(max) if !bounds::within_max_length(field.value.text(), max) => self.fail(
                    field,
                    format!("This field can only be {max} characters long"),
                ),
                _ => RuleOutcome::Valid,
            },

            Rule::MinLength => match parsed_attr::<usize>(field, "minlength") {
                Some(min) if !bounds::within_min_length(field.value.text(), min) => self.fail(
                    field,
                    format!("This field must be at least {min} characters long"),
                ),
                _ => RuleOutcome::Valid,
            },

            Rule::Min => match (parsed_attr::<f64>(field, "min"), field.attr("min")) {
                (Some(min), Some(raw)) => match field.value.text().parse::<f64>() {
                    Ok(value) if !bounds::at_least(value, min) => {
                        self.fail(field, format!("Value must be greater or equal to {raw}"))
                    }
                    _ => RuleOutcome::Valid,
                },
                _ => RuleOutcome::Valid,
            },

            Rule::Max => match (parsed_attr::<f64>(field, "max"), field.attr("max")) {
                (Some(max), Some(raw)) => match field.value.text().parse::<f64>() {
                    Ok(value) if !bounds::at_most(value, max) => {
                        self.fail(field, format!("Value must be less or equal to {raw}"))
                    }
                    _ => RuleOutcome::Valid,
                },
                _ => RuleOutcome::Valid,
            },

            Rule::Email => self.check_format(field, format::is_valid_email, || {
                "This field must be a valid email".to_string()
            }),

            Rule::Number => self.check_format(field, format::is_number, || {
                "This field must be a number".to_string()
            }),

            Rule::Integer => self.check_marker_format(field, "data-v-integer", format::is_integer, || {
                "This field must be an integer".to_string()
            }),

            Rule::Digits => self.check_marker_format(field, "data-v-digits", format::is_digits, || {
                "This field must be an unsigned integer".to_string()
            }),

            Rule::AlphaNum => {
                self.check_marker_format(field, "data-v-alphanum", format::is_alphanumeric, || {
                    "This field must be alphanumeric".to_string()
                })
            }

            Rule::Url => self.check_marker_format(field, "data-v-url", format::is_valid_url, || {
                "This field must be a URL".to_string()
            }),

            Rule::Pattern => {
                let Some(pattern) = field.attr("pattern") else {
                    return Ok(RuleOutcome::Valid);
                };
                let regex = Regex::new(pattern).map_err(|source| DispatchError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
                let value = field.value.text();
                if value.is_empty() || regex.is_match(value) {
                    RuleOutcome::Valid
                } else {
                    self.fail(
                        field,
                        "This field does not match the required pattern".to_string(),
                    )
                }
            }

            Rule::MatchesOne => {
                let Some(raw) = field.attr("data-v-in") else {
                    return Ok(RuleOutcome::Valid);
                };
                let value = field.value.text();
                let allowed = collection::split_list(raw);
                if value.is_empty() || collection::is_one_of(value, &allowed) {
                    RuleOutcome::Valid
                } else {
                    self.fail(field, format!("Value must be one of {}", allowed.join(", ")))
                }
            }

            Rule::Checked => {
                if !field.kind.is_checkbox_like() {
                    return Ok(RuleOutcome::Valid);
                }
                let applies = field.has_attr("required")
                    || field.has_attr("data-v-checked")
                    || field.has_attr("data-v-accepted");
                if applies && field.value.is_empty() {
                    self.fail(field, "This field must be checked".to_string())
                } else {
                    RuleOutcome::Valid
                }
            }

            Rule::RequiredWith => {
                let Some(other) = field.attr("data-v-required-with") else {
                    return Ok(RuleOutcome::Valid);
                };
                let other_filled = siblings
                    .value_of(other)
                    .is_some_and(|value| !value.is_empty());
                if other_filled && field.value.is_empty() {
                    self.fail(field, format!("This field is required with {other}"))
                } else {
                    RuleOutcome::Valid
                }
            }
        };
        Ok(outcome)
    }

    /// Format rule tied to the control's declared type. Empty values pass;
    /// emptiness is `Required`'s concern.
    fn check_format(
        self,
        field: &FieldSnapshot<'_>,
        predicate: fn(&str) -> bool,
        default: impl FnOnce() -> String,
    ) -> RuleOutcome {
        let expected_kind = match self {
            Rule::Email => crate::control::ControlKind::Email,
            Rule::Number => crate::control::ControlKind::Number,
            _ => return RuleOutcome::Valid,
        };
        if field.kind != expected_kind {
            return RuleOutcome::Valid;
        }
        let value = field.value.text();
        if value.is_empty() || predicate(value) {
            RuleOutcome::Valid
        } else {
            self.fail(field, default())
        }
    }

    /// Format rule activated by a marker attribute. Empty values pass.
    fn check_marker_format(
        self,
        field: &FieldSnapshot<'_>,
        marker: &str,
        predicate: fn(&str) -> bool,
        default: impl FnOnce() -> String,
    ) -> RuleOutcome {
        if !field.has_attr(marker) {
            return RuleOutcome::Valid;
        }
        let value = field.value.text();
        if value.is_empty() || predicate(value) {
            RuleOutcome::Valid
        } else {
            self.fail(field, default())
        }
    }

    fn fail(self, field: &FieldSnapshot<'_>, default: String) -> RuleOutcome {
        RuleOutcome::Invalid(messages::resolve(self, field, default))
    }
}

/// Numeric attribute helper: `None` when absent or unparsable, in which
/// case the bound rule does not apply.
fn parsed_attr<T: std::str::FromStr>(field: &FieldSnapshot<'_>, name: &str) -> Option<T> {
    field.attr(name).and_then(|raw| raw.trim().parse().ok())
}
