//! Filesystem and sandbox helpers.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`;
//! [`paths`] maps between host and sandbox paths, and [`attachment`] reads
//! file metadata for the resume field.

pub mod attachment;
pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix};
