//! Background worker for export file I/O.
//!
//! Exports are rendered and written on a Zellij worker thread so the plugin's
//! render loop never touches the filesystem.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: The worker and its message processing

pub mod handler;
pub mod messages;

pub use handler::ExportWorker;
pub use messages::{ExportMessage, ExportResponse, TraceContext};

/// Worker name registered by the plugin shim; requests are posted to it.
pub const EXPORT_WORKER: &str = "zform";
