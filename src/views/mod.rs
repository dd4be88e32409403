// ============================================================================
// VIEWS - Pure render functions: state in, DOM out
// ============================================================================

pub mod table;
pub mod wizard;

pub use table::{render_table, TableRow};
pub use wizard::{render_wizard_form, render_wizard_header, OnInput};
