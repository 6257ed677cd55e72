//! Pattern-based CSS and JavaScript minification.
//!
//! Both minifiers are a fixed sequence of textual substitutions, not
//! tokenizers. They cannot tell a comment delimiter or an operator inside a
//! string or regex literal from a real one, so they are only safe on sources
//! written with that in mind (no `/*` inside strings, no significant
//! whitespace around operators in literals).

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| re(r"(?s)/\*.*?\*/"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| re(r"\s+"));
static CSS_STRUCTURAL: LazyLock<Regex> = LazyLock::new(|| re(r"\s*([{}:;,>+~])\s*"));
static JS_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| re(r"\s*([{}();,=+\-*/<>!&|])\s*"));

/// Compiles a pattern that is a literal in this module.
fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern {pattern:?}: {e}"))
}

/// Minifies a stylesheet.
///
/// Strips `/* */` comments, collapses whitespace, drops whitespace around
/// `{ } : ; , > + ~`, removes the last semicolon of each block and trims.
pub fn minify_css(source: &str) -> String {
    let text = BLOCK_COMMENT.replace_all(source, "");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = CSS_STRUCTURAL.replace_all(&text, "$1");
    text.replace(";}", "}").trim().to_string()
}

/// Minifies a script.
///
/// Strips `//` line comments (see [`strip_line_comments`]) then `/* */`
/// comments, collapses whitespace, drops whitespace around
/// `{ } ( ) ; , = + - * / < > ! & |` and trims.
pub fn minify_js(source: &str) -> String {
    let text = strip_line_comments(source);
    let text = BLOCK_COMMENT.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = JS_PUNCTUATION.replace_all(&text, "$1");
    text.trim().to_string()
}

/// Removes `//` comments through end of line.
///
/// A `//` is not a comment start when `http:` or `https:` appears later on
/// the same line, or when it is the `//` of such a scheme itself.
pub fn strip_line_comments(source: &str) -> String {
    source
        .split_inclusive('\n')
        .map(|line| {
            let (body, eol) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            match comment_start(body) {
                Some(idx) => format!("{}{}", &body[..idx], eol),
                None => line.to_string(),
            }
        })
        .collect()
}

fn comment_start(line: &str) -> Option<usize> {
    line.match_indices("//").map(|(idx, _)| idx).find(|&idx| {
        let before = &line[..idx];
        let after = &line[idx + 2..];
        let is_scheme = before.ends_with("http:") || before.ends_with("https:");
        let url_follows = after.contains("http:") || after.contains("https:");
        !is_scheme && !url_follows
    })
}
