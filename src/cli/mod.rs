mod args;
mod prompt;

pub use args::{parse_log_level, Cli};
pub use prompt::prompt_filter_options;
