//! Shared test utilities for integration tests.
//!
//! Provides a temporary landing page source tree laid out the way the
//! default build configuration expects it.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="author" content="Riverside Night Market">
    <title>Riverside Night Market</title>
    <link rel="stylesheet" href="css/variables.css">
    <link rel="stylesheet" href="css/base.css">
    <link rel="stylesheet" href="css/header.css">
    <link rel="stylesheet" href="css/hero.css">
</head>
<body>
    <a class="skip-link" href="#main">Skip to content</a>
    <header class="header"><nav class="nav"></nav></header>
    <main id="main"><section class="hero"></section></main>
    <script src="js/navigation.js"></script>
    <script src="js/form.js"></script>
    <script src="js/main.js"></script>
</body>
</html>
"##;

/// Creates a temporary site with stylesheets, scripts, markup and assets.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_site() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();

    write_file(root, "index.html", INDEX_HTML)?;

    write_file(
        root,
        "css/variables.css",
        "/* Design tokens */\n:root {\n    --brand: #d35400;\n    --space: 1rem;\n}\n",
    )?;
    write_file(
        root,
        "css/base.css",
        "body {\n    margin: 0;\n    font-family: system-ui, sans-serif;\n}\n\n.sr-only {\n    position: absolute;\n    width: 1px;\n}\n",
    )?;
    write_file(
        root,
        "css/header.css",
        ".header {\n    position: sticky;\n    top: 0;\n}\n\n.nav > a + a {\n    margin-left: var(--space);\n}\n",
    )?;
    write_file(
        root,
        "css/hero.css",
        ".hero {\n    min-height: 80vh;\n    background: var(--brand);\n}\n",
    )?;
    write_file(
        root,
        "css/footer.css",
        ".footer {\n    padding: 2rem;\n}\n",
    )?;

    write_file(
        root,
        "js/navigation.js",
        "// Mobile menu toggle\nconst toggle = document.querySelector('.nav-toggle');\nif (toggle && toggle.dataset) {\n    toggle.addEventListener('click', open);\n}\n",
    )?;
    write_file(
        root,
        "js/form.js",
        "/* Contact form */\nconst endpoint = \"https://formspree.io/f/market\"; // delivery endpoint\n",
    )?;
    write_file(root, "js/main.js", "init();\n")?;

    write_file(root, "assets/images/logo.svg", "<svg></svg>")?;
    write_file(root, "fonts/inter.woff2", "font-bytes")?;

    Ok(dir)
}

/// Writes file under `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
