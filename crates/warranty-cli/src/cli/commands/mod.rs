//! CLI command handlers. Each command is in its own file.

mod check_digit;
mod completions;
mod generate;
pub(super) mod range;
mod validate;
pub(super) mod verify;

pub use check_digit::run_check_digit;
pub use completions::run_completions;
pub use generate::run_generate;
pub use range::run_range;
pub use validate::run_validate;
pub use verify::run_verify;
