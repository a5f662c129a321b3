//! CLI command handlers. Each command is in its own file.

mod completions;
mod loaders;
mod locate;
mod show;

pub use completions::{run_completions, run_man};
pub use loaders::run_loaders;
pub use locate::run_locate;
pub use show::run_show;
