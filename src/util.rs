//! Utility functions for pagepress

/// Renders an artifact size for the build summary.
///
/// Sizes under 1 KiB print as whole bytes; larger ones use KB or MB
/// (binary prefixes) with two decimals, e.g. "1.50 KB".
pub fn format_file_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Percentage saved going from `before` to `after` bytes.
///
/// Returns 0.0 for empty input or when the output grew.
pub fn savings_percent(before: usize, after: usize) -> f64 {
    if before == 0 || after >= before {
        return 0.0;
    }
    (before - after) as f64 * 100.0 / before as f64
}
