//! Form state store and submission engine.
//!
//! The store ([`FormState`]) holds the record, the error map derived from it
//! and the lifecycle phase. The engine ([`engine`]) defines the transitions
//! between phases as pure functions over that state. The application layer
//! owns the single live `FormState` and swaps it for the result of each
//! transition.
//!
//! # Example
//!
//! ```
//! use zform::form::{edit, submit, FieldInput, FormPhase, FormState, Severity};
//!
//! let state = edit(FormState::new(), FieldInput::FirstName("Al".to_string())).state;
//! assert!(state.errors().get(zform::domain::Field::FirstName).is_some());
//!
//! let rejected = submit(state);
//! assert_eq!(rejected.state.phase(), FormPhase::Rejected);
//! assert_eq!(rejected.notification.map(|n| n.severity), Some(Severity::Error));
//! ```

pub mod engine;
pub mod store;

pub use engine::{
    dismiss, edit, reset, submit, submit_at, FieldInput, Notification, Severity, Transition,
    SUBMIT_REJECTED, SUBMIT_SUCCESS,
};
pub use store::{FormPhase, FormState, Submission};
