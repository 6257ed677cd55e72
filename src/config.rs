//! Command line and build configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Bundled stylesheet, relative to the output root.
pub const CSS_BUNDLE: &str = "css/styles.min.css";

/// Extracted above-the-fold rules, relative to the output root.
pub const CRITICAL_CSS: &str = "css/critical.min.css";

/// Bundled script, relative to the output root.
pub const JS_BUNDLE: &str = "js/scripts.min.js";

/// Stylesheets in cascade order.
const CSS_FILES: &[&str] = &[
    "css/variables.css",
    "css/base.css",
    "css/layout.css",
    "css/header.css",
    "css/hero.css",
    "css/sections.css",
    "css/components.css",
    "css/carousel.css",
    "css/modal.css",
    "css/forms.css",
    "css/footer.css",
    "css/dark-mode.css",
    "css/accessibility.css",
    "css/responsive.css",
];

/// Scripts in execution order.
const JS_FILES: &[&str] = &[
    "js/navigation.js",
    "js/smooth-scroll.js",
    "js/lazy-loading.js",
    "js/carousel.js",
    "js/modal.js",
    "js/dark-mode.js",
    "js/accessibility.js",
    "js/form.js",
    "js/main.js",
];

/// Selectors rendered above the fold.
///
/// `:root` is not listed: the extractor always emits it first.
const CRITICAL_SELECTORS: &[&str] = &[
    "body",
    ".skip-link",
    ".sr-only",
    ".header",
    ".nav",
    ".logo",
    ".nav-toggle",
    ".hero",
    ".hero-content",
    ".hero-title",
    ".hero-subtitle",
    ".btn-primary",
];

const ASSET_DIRS: &[&str] = &["assets", "fonts"];

/// Command line configuration for Pagepress.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagepress", version, about, long_about = None)]
pub struct Config {
    /// Site source root
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output directory (relative paths resolve against the source root)
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Page markup to rewrite, relative to the source root
    #[arg(long, default_value = "index.html")]
    pub html: PathBuf,

    /// Skip writing the Apache .htaccess file
    #[arg(long)]
    pub no_htaccess: bool,

    /// Open the built page in the default browser
    #[arg(long)]
    pub open: bool,

    /// Log skipped sources and per-stage details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the source root or the page markup does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            bail!("Source root does not exist: {}", self.root.display());
        }

        let html = self.root.join(&self.html);
        if !html.is_file() {
            bail!("Page markup does not exist: {}", html.display());
        }

        Ok(())
    }

    /// Resolves the command line into an immutable build configuration.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            output: self.root.join(&self.output),
            html: self.html.clone(),
            write_htaccess: !self.no_htaccess,
            ..BuildConfig::new(&self.root)
        }
    }
}

/// Everything a build run reads, fixed before the first stage starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory all source paths are relative to.
    pub root: PathBuf,
    /// Output root; overwritten in place on each run.
    pub output: PathBuf,
    /// Page markup, relative to `root`.
    pub html: PathBuf,
    pub css_files: Vec<String>,
    pub js_files: Vec<String>,
    pub critical_selectors: Vec<String>,
    /// Directories copied verbatim into the output root.
    pub asset_dirs: Vec<String>,
    pub write_htaccess: bool,
}

impl BuildConfig {
    /// Default configuration for a site rooted at `root`, writing to `root/dist`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            output: root.join("dist"),
            root,
            html: PathBuf::from("index.html"),
            css_files: to_owned(CSS_FILES),
            js_files: to_owned(JS_FILES),
            critical_selectors: to_owned(CRITICAL_SELECTORS),
            asset_dirs: to_owned(ASSET_DIRS),
            write_htaccess: true,
        }
    }

    pub fn html_source(&self) -> PathBuf {
        self.root.join(&self.html)
    }

    /// Resolves a path relative to the output root.
    pub fn out(&self, relative: &str) -> PathBuf {
        self.output.join(relative)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
