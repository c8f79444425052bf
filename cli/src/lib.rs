pub mod commands;
pub mod context;
pub mod logging;
pub mod repl;
pub mod surface;

pub use context::{CliContext, TERMINAL_CHANNEL};
pub use repl::readline;
