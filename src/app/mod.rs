//! Application layer between the plugin shim and the form engine.
//!
//! ```text
//! key / worker reply ─▶ Event ─▶ handle_event ─▶ FormState transition
//!                                     │
//!                                     └─▶ Vec<Action> ─▶ shim (banner, hide, worker, fs)
//! ```
//!
//! - [`actions`]: Side effects for the shim to run
//! - [`handler`]: Event processing
//! - [`modes`]: View and input modes derived from state
//! - [`state`]: The application state and its view model

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputKind, ViewMode};
pub use state::AppState;
