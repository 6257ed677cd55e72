//! Stage logging with coloured prefixes.
//!
//! ```ignore
//! log!("css"; "bundled {} files", count);
//! debug!("css"; "skipped {}", path);
//! ```

use owo_colors::OwoColorize;
use std::io::{Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose)
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a coloured stage prefix
#[macro_export]
macro_rules! log {
    ($stage:expr; $($arg:tt)*) => {{
        $crate::logger::log($stage, &format!($($arg)*))
    }};
}

/// Log a message only when --verbose is enabled
#[macro_export]
macro_rules! debug {
    ($stage:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($stage, &format!($($arg)*))
        }
    }};
}

pub fn log(stage: &str, message: &str) {
    let prefix = colorize_prefix(stage);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

fn colorize_prefix(stage: &str) -> String {
    let prefix = format!("[{stage}]");
    match stage.to_ascii_lowercase().as_str() {
        "done" => prefix.bright_green().bold().to_string(),
        "error" | "warn" => prefix.bright_red().bold().to_string(),
        "html" => prefix.bright_blue().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}
