//! Side effects requested by the event handler.
//!
//! The handler never calls Zellij APIs itself; it returns these commands and
//! the plugin shim executes them in order.

use crate::form::Notification;
use crate::worker::ExportMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Shows a transient banner.
    Notify(Notification),

    /// Reads the metadata of the file at `path` and reports it back as
    /// `Event::ResumePicked`.
    InspectResume { path: String },

    /// Sends a request to the export worker.
    PostToWorker(ExportMessage),
}
