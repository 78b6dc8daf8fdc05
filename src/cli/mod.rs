mod commands;
mod handlers;

pub use commands::{Cli, Commands, GeminiArgs};
pub use handlers::{handle_clear, handle_generate, handle_list, handle_serve, handle_stats};
