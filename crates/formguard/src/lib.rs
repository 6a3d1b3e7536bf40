//! Formguard — attribute-driven form validation
//!
//! Validates form controls against declarative constraints carried as
//! element attributes (standard HTML attributes plus `data-v-*` markers),
//! producing per-field error lists without any server round-trip.
//!
//! The flow runs one direction: [`Validator`] walks a [`Form`],
//! [`dispatch_control`] picks the ordered rule subset for each control's
//! category, each [`Rule`] evaluates a [`FieldSnapshot`] and resolves its
//! message (custom `data-v-{rule}-msg` override or default), and failures
//! aggregate into a [`FormResult`].
//!
//! DOM event wiring and error rendering are external collaborators: the
//! renderer plugs in through [`ValidationOptions::show_func`], and the
//! event layer queries [`ValidationOptions::fires_on`].

pub mod control;
pub mod dispatch;
pub mod error;
pub mod messages;
pub mod options;
pub mod rules;
pub mod validator;

pub use control::{Control, ControlKind, ControlRef, FieldSnapshot, FieldValue, Form, SiblingLookup};
pub use dispatch::{dispatch_control, rules_for, FieldError};
pub use error::DispatchError;
pub use options::{ClearFunc, ShowFunc, Trigger, ValidationOptions};
pub use rules::{Rule, RuleOutcome};
pub use validator::{FormResult, Validator};
