//! CLI command handlers, one per file.

mod checksum;
mod completions;
mod generate;
mod list;
mod normalize;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use generate::run_generate;
pub use list::run_list;
pub use normalize::run_normalize;
