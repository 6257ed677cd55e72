//! Production rewrite of the page markup.
//!
//! The rewrite is plain text substitution against fixed markers, not a DOM
//! transform. A marker missing from the source simply leaves that step
//! without effect.

use maud::{Markup, PreEscaped, html};
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::config::{CSS_BUNDLE, JS_BUNDLE};

static STYLESHEET_LINK: LazyLock<Regex> =
    LazyLock::new(|| re(r#"[ \t]*<link rel="stylesheet" href="css/[^"]+\.css">[ \t]*\r?\n?"#));
static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| re(r#"[ \t]+<script src="js/[^"]+\.js"></script>[ \t]*\r?\n?"#));
static AUTHOR_META: LazyLock<Regex> = LazyLock::new(|| re(r#"<meta name="author" content="[^"]*">"#));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern {pattern:?}: {e}"))
}

/// Inline stylesheet carrying the above-the-fold rules.
pub fn critical_style(css: &str) -> Markup {
    html! { style { (PreEscaped(css)) } }
}

/// Loads the full bundle without blocking render, with a no-script fallback.
pub fn deferred_stylesheet() -> Markup {
    html! {
        link rel="preload" href=(CSS_BUNDLE) as="style" onload="this.onload=null;this.rel='stylesheet'";
        noscript { link rel="stylesheet" href=(CSS_BUNDLE); }
    }
}

pub fn bundle_script() -> Markup {
    html! { script src=(JS_BUNDLE) {} }
}

/// Caching hints and connection warm-up for third-party origins.
pub fn performance_hints() -> Markup {
    html! {
        meta http-equiv="Cache-Control" content="public, max-age=31536000";
        link rel="dns-prefetch" href="//fonts.googleapis.com";
        link rel="dns-prefetch" href="//formspree.io";
        link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
    }
}

/// Rewrites development markup to reference the production bundles.
///
/// Steps, in order:
/// 1. drop every `<link rel="stylesheet" href="css/*.css">`
/// 2. inline `critical_css` in a `<style>` before the first `</head>`
/// 3. add the deferred bundle stylesheet before the first `</head>`
/// 4. drop every indented `<script src="js/*.js"></script>`
/// 5. add the bundle script before the first `</body>`
/// 6. add [`performance_hints`] after the author `<meta>`
pub fn rewrite_html(source: &str, critical_css: &str) -> String {
    let text = STYLESHEET_LINK.replace_all(source, "");
    let text = insert_before(&text, "</head>", &critical_style(critical_css).into_string());
    let text = insert_before(&text, "</head>", &deferred_stylesheet().into_string());
    let text = SCRIPT_TAG.replace_all(&text, "");
    let text = insert_before(&text, "</body>", &bundle_script().into_string());

    let hints = performance_hints().into_string();
    AUTHOR_META
        .replacen(&text, 1, |caps: &Captures| format!("{}\n    {}", &caps[0], hints))
        .into_owned()
}

/// Inserts `markup` on its own line before the first `marker`.
fn insert_before(text: &str, marker: &str, markup: &str) -> String {
    text.replacen(marker, &format!("{}\n{}", markup, marker), 1)
}
