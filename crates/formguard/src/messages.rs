// File: src/messages.rs
// Purpose: Message resolution — custom override attribute or default

use crate::control::FieldSnapshot;
use crate::rules::Rule;

/// Resolve the user-facing message for a violated rule.
///
/// A `data-v-{key}-msg` attribute with a non-empty value wins verbatim —
/// literal text, no placeholder substitution. Otherwise the default
/// message is used; callers substitute placeholders from the triggering
/// attribute before passing it in.
pub fn resolve(rule: Rule, field: &FieldSnapshot<'_>, default: String) -> String {
    let key = format!("data-v-{}-msg", rule.key());
    match field.attr(&key) {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => default,
    }
}
