//! Editor UI: inspector panels, output panel, preview viewport.

mod inspector;
mod layout;
mod output;
mod viewport;

pub use layout::MenuEditorLayout;
