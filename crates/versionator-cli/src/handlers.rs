//! Command handlers for CLI subcommands
//!
//! Each subcommand lives in its own module; this module re-exports the
//! entry points that `main` dispatches to.

mod compare;
mod completions;
mod exclusions;
mod project;
mod utils;
mod validate;

pub use compare::handle_compare;
pub use completions::handle_completions;
pub use exclusions::handle_exclusions;
pub use project::handle_project;
pub use validate::handle_validate;
