//! Above-the-fold rule extraction from minified CSS.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

static ROOT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":root\s*\{[^}]*\}").unwrap_or_else(|e| panic!("invalid :root pattern: {e}"))
});

/// Collects whole rule blocks for `selectors` out of minified `css`.
///
/// Every `:root{...}` block comes first, in document order. Then, for each
/// selector in list order, every `<selector>{...}` block in document order.
/// Selectors match as literal text, so `.nav` also matches the tail of
/// `.top .nav{...}`. Output is not deduplicated: a block matched by two selectors appears twice.
///
/// # Errors
///
/// Returns error if a selector produces an invalid pattern after escaping.
pub fn extract_critical(css: &str, selectors: &[String]) -> Result<String> {
    let mut out = String::new();

    for m in ROOT_BLOCK.find_iter(css) {
        out.push_str(m.as_str());
    }

    for selector in selectors {
        let pattern = format!(r"{}\s*\{{[^}}]*\}}", regex::escape(selector));
        let rule = Regex::new(&pattern)
            .with_context(|| format!("Invalid critical selector: {}", selector))?;
        for m in rule.find_iter(css) {
            out.push_str(m.as_str());
        }
    }

    Ok(out)
}
