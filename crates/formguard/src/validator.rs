// File: src/validator.rs
// Purpose: Whole-form validation pass and per-field re-validation

use indexmap::IndexMap;
use tracing::debug;

use crate::control::{ControlRef, Form};
use crate::dispatch::{dispatch_control, FieldError};
use crate::error::DispatchError;
use crate::options::ValidationOptions;

/// Per-form validation outcome: field name → error, keys unique,
/// iteration order = document order. Empty iff the form is valid.
pub type FormResult = IndexMap<String, FieldError>;

/// Drives validation passes over a form and owns the current result.
///
/// The result map is created fresh and fully replaced on every whole-form
/// pass — never partially mutated across passes. Per-field re-validation
/// updates a single entry and fires the show/clear callbacks so the
/// renderer can track invalid → valid transitions.
pub struct Validator {
    options: ValidationOptions,
    result: FormResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationOptions::default())
    }
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            result: FormResult::new(),
        }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Current per-field errors from the latest pass.
    pub fn errors(&self) -> &FormResult {
        &self.result
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_empty()
    }

    /// Validate every control in document order.
    ///
    /// Skips disabled/readonly controls, folds each failure into a fresh
    /// result keyed by field name (last write per name wins), then fires
    /// `show_func` for each failing field and `clear_func` for fields that
    /// recovered since the previous pass. Returns `Ok(true)` iff the form
    /// is valid. Hard failures propagate and leave the previous result in
    /// place.
    pub fn validate_form(&mut self, form: &Form) -> Result<bool, DispatchError> {
        let mut fresh = FormResult::new();
        for (at, control) in form.controls() {
            if let Some(error) = dispatch_control(control, at, form)? {
                fresh.insert(error.name.clone(), error);
            }
        }
        debug!(fields = form.len(), errors = fresh.len(), "form validation pass");

        let previous = std::mem::replace(&mut self.result, fresh);
        for name in previous.keys() {
            if !self.result.contains_key(name) {
                (self.options.clear_func)(name);
            }
        }
        for error in self.result.values() {
            if self.options.show_first_error_only {
                (self.options.show_func)(&error.truncated());
            } else {
                (self.options.show_func)(error);
            }
        }
        Ok(self.result.is_empty())
    }

    /// Re-validate a single control and update its entry in the result.
    ///
    /// Fires `show_func` on failure; fires `clear_func` when the field had
    /// an error and now validates clean.
    pub fn validate_field(
        &mut self,
        form: &Form,
        at: ControlRef,
    ) -> Result<Option<&FieldError>, DispatchError> {
        let Some(control) = form.control(at) else {
            return Ok(None);
        };
        let name = control.name().to_string();

        match dispatch_control(control, at, form)? {
            Some(error) => {
                if self.options.show_first_error_only {
                    (self.options.show_func)(&error.truncated());
                } else {
                    (self.options.show_func)(&error);
                }
                self.result.insert(name.clone(), error);
                Ok(self.result.get(&name))
            }
            None => {
                if self.result.shift_remove(&name).is_some() {
                    (self.options.clear_func)(&name);
                }
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Control;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn three_field_form() -> Form {
        Form::new()
            .with(Control::input("text", "username").attr("required", "").value("ada"))
            .with(Control::input("email", "email").attr("required", ""))
            .with(Control::textarea("bio").value("hello"))
    }

    #[test]
    fn test_one_failing_field_fails_the_form() {
        let form = three_field_form();
        let mut validator = Validator::default();

        assert!(!validator.validate_form(&form).unwrap());
        assert!(!validator.is_valid());
        assert_eq!(validator.errors().len(), 1);
        let error = validator.errors().get("email").unwrap();
        assert_eq!(error.messages, vec!["This field is required".to_string()]);
    }

    #[test]
    fn test_result_is_replaced_each_pass() {
        let mut form = three_field_form();
        let mut validator = Validator::default();
        assert!(!validator.validate_form(&form).unwrap());

        let at = form.control_named("email").unwrap();
        form.control_mut(at).unwrap().set_value("ada@example.com");
        assert!(validator.validate_form(&form).unwrap());
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_result_keys_follow_document_order() {
        let form = Form::new()
            .with(Control::input("text", "zeta").attr("required", ""))
            .with(Control::input("text", "alpha").attr("required", ""));
        let mut validator = Validator::default();
        validator.validate_form(&form).unwrap();

        let keys: Vec<&String> = validator.errors().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let form = Form::new()
            .with(Control::input("text", "dup").attr("required", ""))
            .with(Control::input("text", "dup").attr("data-v-digits", "").value("xyz"));
        let mut validator = Validator::default();
        validator.validate_form(&form).unwrap();

        assert_eq!(validator.errors().len(), 1);
        let error = validator.errors().get("dup").unwrap();
        assert_eq!(error.messages, vec!["This field must be an unsigned integer".to_string()]);
    }

    #[test]
    fn test_show_callback_fires_per_failing_field() {
        let shown: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);

        let mut options = ValidationOptions::default();
        options.show_func = Box::new(move |error| sink.borrow_mut().push(error.name.clone()));

        let form = Form::new()
            .with(Control::input("text", "a").attr("required", ""))
            .with(Control::input("text", "b").attr("required", "").value("ok"))
            .with(Control::input("text", "c").attr("required", ""));
        let mut validator = Validator::new(options);
        validator.validate_form(&form).unwrap();

        assert_eq!(*shown.borrow(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_show_truncates_to_first_message_by_default() {
        let messages: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&messages);

        let mut options = ValidationOptions::default();
        options.show_func = Box::new(move |error| sink.borrow_mut().push(error.messages.len()));

        // Two violations, but only the first is reported
        let form = Form::new().with(
            Control::input("text", "code")
                .attr("pattern", r"^\d+$")
                .attr("data-v-alphanum", "")
                .value("a b"),
        );
        let mut validator = Validator::new(options);
        validator.validate_form(&form).unwrap();
        assert_eq!(*messages.borrow(), vec![1]);

        // The stored result still carries everything
        assert_eq!(validator.errors().get("code").unwrap().messages.len(), 2);
    }

    #[test]
    fn test_clear_callback_fires_on_recovery() {
        let cleared: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&cleared);

        let mut options = ValidationOptions::default();
        options.clear_func = Box::new(move |name| sink.borrow_mut().push(name.to_string()));

        let mut form = Form::new().with(Control::input("text", "a").attr("required", ""));
        let mut validator = Validator::new(options);
        validator.validate_form(&form).unwrap();
        assert!(cleared.borrow().is_empty());

        let at = form.control_named("a").unwrap();
        form.control_mut(at).unwrap().set_value("filled");
        validator.validate_form(&form).unwrap();
        assert_eq!(*cleared.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_validate_field_updates_single_entry() {
        let mut form = three_field_form();
        let mut validator = Validator::default();
        validator.validate_form(&form).unwrap();
        assert_eq!(validator.errors().len(), 1);

        let at = form.control_named("email").unwrap();
        form.control_mut(at).unwrap().set_value("ada@example.com");
        assert!(validator.validate_field(&form, at).unwrap().is_none());
        assert!(validator.is_valid());

        form.control_mut(at).unwrap().set_value("");
        let error = validator.validate_field(&form, at).unwrap().unwrap();
        assert_eq!(error.name, "email");
        assert_eq!(validator.errors().len(), 1);
    }

    #[test]
    fn test_hard_failure_propagates_from_form_pass() {
        let form = Form::new()
            .with(Control::input("text", "ok").value("fine"))
            .with(Control::input("range", "volume"));
        let mut validator = Validator::default();
        let err = validator.validate_form(&form).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownControlType { .. }));
    }
}
