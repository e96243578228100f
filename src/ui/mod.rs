//! Terminal rendering with a component-based layout.
//!
//! ```text
//! AppState → compute_viewmodel → FormViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready frame description
//! - [`renderer`]: Picks the layout for the current view
//! - [`components`]: Header, banner, fields, summary and footer renderers
//! - [`helpers`]: Cursor positioning, truncation and borders
//! - [`theme`]: Color themes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{BannerInfo, FieldRow, FooterInfo, FormViewModel, HeaderInfo, SummaryView};
