//! Formguard validation predicates
//!
//! Pure, stateless predicate functions over string values. Each function
//! answers a single yes/no question about a value; message formatting and
//! rule dispatch live in the `formguard` engine crate.

pub mod bounds;
pub mod collection;
pub mod format;

// Re-export all predicates
pub use bounds::*;
pub use collection::*;
pub use format::*;
