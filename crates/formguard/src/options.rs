// File: src/options.rs
// Purpose: Validation options record and the renderer callback seam

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dispatch::FieldError;

/// Callback invoked once per failing field per validation pass.
pub type ShowFunc = Box<dyn FnMut(&FieldError)>;

/// Callback invoked with a field name when it transitions from invalid
/// to valid.
pub type ClearFunc = Box<dyn FnMut(&str)>;

/// External trigger kinds the event-wiring collaborator can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    KeyUp,
    Blur,
    Submit,
    Invalid,
}

/// Configuration record for the validator.
///
/// The flag and class-name fields round-trip through serde so a partial
/// config record deserializes onto the documented defaults; the callback
/// seams are skipped and fall back to the built-in tracing renderer.
#[derive(Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Re-run field rules on each input-change event.
    pub validate_on_key_up: bool,
    /// Re-run field rules on focus loss.
    pub validate_on_blur: bool,
    /// Run the full form before allowing submission.
    pub validate_on_submit: bool,
    /// Intercept native constraint-violation signals and replace their
    /// message with this engine's own.
    pub validate_on_invalid: bool,
    /// Report only the first collected message per field to `show_func`.
    pub show_first_error_only: bool,
    /// Presentation hook, consumed only by the external renderer.
    pub error_container_class_name: String,
    /// Presentation hook, consumed only by the external renderer.
    pub error_class_name: String,
    #[serde(skip, default = "default_show_func")]
    pub show_func: ShowFunc,
    #[serde(skip, default = "default_clear_func")]
    pub clear_func: ClearFunc,
}

impl ValidationOptions {
    /// Whether validation fires on the given external trigger.
    pub fn fires_on(&self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::KeyUp => self.validate_on_key_up,
            Trigger::Blur => self.validate_on_blur,
            Trigger::Submit => self.validate_on_submit,
            Trigger::Invalid => self.validate_on_invalid,
        }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            validate_on_key_up: false,
            validate_on_blur: false,
            validate_on_submit: true,
            validate_on_invalid: true,
            show_first_error_only: true,
            error_container_class_name: "error-container".to_string(),
            error_class_name: "error".to_string(),
            show_func: default_show_func(),
            clear_func: default_clear_func(),
        }
    }
}

impl fmt::Debug for ValidationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationOptions")
            .field("validate_on_key_up", &self.validate_on_key_up)
            .field("validate_on_blur", &self.validate_on_blur)
            .field("validate_on_submit", &self.validate_on_submit)
            .field("validate_on_invalid", &self.validate_on_invalid)
            .field("show_first_error_only", &self.show_first_error_only)
            .field("error_container_class_name", &self.error_container_class_name)
            .field("error_class_name", &self.error_class_name)
            .finish_non_exhaustive()
    }
}

/// Built-in renderer: log the failing field. The DOM collaborator
/// replaces this with its own element-level renderer.
fn default_show_func() -> ShowFunc {
    Box::new(|error: &FieldError| {
        warn!(field = %error.name, messages = ?error.messages, "validation failed");
    })
}

fn default_clear_func() -> ClearFunc {
    Box::new(|name: &str| {
        debug!(field = name, "validation errors cleared");
    })
}
