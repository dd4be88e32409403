// ============================================================================
// DOM MODULE - Thin helpers over web_sys for the views
// ============================================================================

pub mod builder;
pub mod dialog;
pub mod element;
pub mod events;
pub mod files;

pub use builder::ElementBuilder;
pub use dialog::BrowserConfirm;
pub use element::*;
pub use events::{on_click, on_event, release_listeners};
pub use files::read_selected_files;
