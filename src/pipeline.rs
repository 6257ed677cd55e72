//! Production build sequence.
//!
//! Stages run strictly in order, each reading what the previous one wrote:
//! output directories, CSS bundle, JS bundle, critical CSS, static assets,
//! page markup, `.htaccess`. The first failing stage aborts the run; outputs
//! already written are left as they are and overwritten on the next run.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::bundle::{Bundle, bundle};
use crate::config::{BuildConfig, CRITICAL_CSS, CSS_BUNDLE, JS_BUNDLE};
use crate::copy::copy_dir;
use crate::critical::extract_critical;
use crate::dirs::init_output_dirs;
use crate::html::rewrite_html;
use crate::htaccess::write_htaccess;
use crate::minify::{minify_css, minify_js};
use crate::util::{format_file_size, savings_percent};
use crate::{debug, log};

/// A file written by the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub css: Bundle,
    pub js: Bundle,
    /// Files copied from the static asset directories.
    pub assets_copied: usize,
    /// Written artifacts in the order they were produced.
    pub artifacts: Vec<Artifact>,
}

impl BuildReport {
    /// Returns the artifact written to `path`, if any.
    pub fn artifact(&self, path: &Path) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.path == path)
    }

    pub fn total_bytes(&self) -> usize {
        self.artifacts.iter().map(|a| a.bytes).sum()
    }
}

/// Runs every build stage for `config`.
///
/// # Errors
///
/// Returns error from the first stage that fails: an unreadable source,
/// a missing page markup file, or any failed write.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    init_output_dirs(&config.output)?;
    log!("dirs"; "prepared {}", config.output.display());

    report.css = bundle(&config.root, &config.css_files).context("Failed to bundle CSS")?;
    let css = minify_css(&report.css.text);
    write_artifact(&mut report, config.out(CSS_BUNDLE), &css)?;
    log_bundle("css", &report.css, config.css_files.len(), css.len());

    report.js = bundle(&config.root, &config.js_files).context("Failed to bundle JS")?;
    let js = minify_js(&report.js.text);
    write_artifact(&mut report, config.out(JS_BUNDLE), &js)?;
    log_bundle("js", &report.js, config.js_files.len(), js.len());

    let critical = extract_critical(&css, &config.critical_selectors)?;
    write_artifact(&mut report, config.out(CRITICAL_CSS), &critical)?;
    log!("critical"; "extracted {} of above-the-fold rules", format_file_size(critical.len()));

    for dir in &config.asset_dirs {
        let src = config.root.join(dir);
        if !src.is_dir() {
            debug!("copy"; "skipped missing {}", dir);
            continue;
        }
        let copied = copy_dir(&src, &config.out(dir))?;
        report.assets_copied += copied;
        log!("copy"; "copied {} files from {}", copied, dir);
    }

    let html = build_html(config)?;
    write_artifact(&mut report, config.out("index.html"), &html)?;
    log!("html"; "rewrote {}", config.html.display());

    if config.write_htaccess {
        let path = write_htaccess(&config.output)?;
        let bytes = fs::metadata(&path)
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len() as usize;
        report.artifacts.push(Artifact { path, bytes });
        log!("htaccess"; "wrote server configuration");
    }

    Ok(report)
}

/// Rewrites the page markup against the critical CSS already on disk.
fn build_html(config: &BuildConfig) -> Result<String> {
    let source_path = config.html_source();
    let source = fs::read_to_string(&source_path)
        .with_context(|| format!("Failed to read page markup {}", source_path.display()))?;

    let critical_path = config.out(CRITICAL_CSS);
    let critical = fs::read_to_string(&critical_path)
        .with_context(|| format!("Failed to read {}", critical_path.display()))?;

    Ok(rewrite_html(&source, &critical))
}

fn write_artifact(report: &mut BuildReport, path: PathBuf, content: &str) -> Result<()> {
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    report.artifacts.push(Artifact {
        path,
        bytes: content.len(),
    });
    Ok(())
}

fn log_bundle(stage: &str, bundle: &Bundle, configured: usize, minified: usize) {
    for skipped in &bundle.skipped {
        debug!(stage; "skipped missing {}", skipped);
    }
    log!(
        stage;
        "bundled {} of {} files, {} -> {} ({:.1}% smaller)",
        bundle.included.len(),
        configured,
        format_file_size(bundle.text.len()),
        format_file_size(minified),
        savings_percent(bundle.text.len(), minified)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> Result<(TempDir, BuildConfig)> {
        let temp = TempDir::new()?;
        let root = temp.path();
        fs::create_dir_all(root.join("css"))?;
        fs::create_dir_all(root.join("js"))?;
        fs::write(root.join("css/base.css"), ":root { --c: red; }\nbody { margin: 0; }\n")?;
        fs::write(root.join("js/main.js"), "init(); // boot\n")?;
        fs::write(
            root.join("index.html"),
            "<head>\n    <link rel=\"stylesheet\" href=\"css/base.css\">\n</head>\n<body>\n    <script src=\"js/main.js\"></script>\n</body>\n",
        )?;

        let config = BuildConfig {
            css_files: vec!["css/base.css".to_string()],
            js_files: vec!["js/main.js".to_string()],
            critical_selectors: vec!["body".to_string()],
            ..BuildConfig::new(root)
        };
        Ok((temp, config))
    }

    #[test]
    fn test_build_writes_every_artifact() -> Result<()> {
        // Arrange
        let (_temp, config) = site()?;

        // Act
        let report = build(&config)?;

        // Assert
        assert_eq!(fs::read_to_string(config.out(CSS_BUNDLE))?, ":root{--c:red}body{margin:0}");
        assert_eq!(fs::read_to_string(config.out(JS_BUNDLE))?, "init();");
        assert_eq!(fs::read_to_string(config.out(CRITICAL_CSS))?, ":root{--c:red}body{margin:0}");
        assert!(config.out(".htaccess").is_file());
        assert_eq!(report.artifacts.len(), 5);
        assert!(report.artifact(&config.out("index.html")).is_some());
        Ok(())
    }

    #[test]
    fn test_report_sizes_match_disk() -> Result<()> {
        // Arrange
        let (_temp, config) = site()?;

        // Act
        let report = build(&config)?;

        // Assert
        for artifact in &report.artifacts {
            assert_eq!(fs::metadata(&artifact.path)?.len() as usize, artifact.bytes);
        }
        assert_eq!(
            report.total_bytes(),
            report.artifacts.iter().map(|a| a.bytes).sum::<usize>()
        );
        Ok(())
    }

    #[test]
    fn test_htaccess_can_be_disabled() -> Result<()> {
        // Arrange
        let (_temp, mut config) = site()?;
        config.write_htaccess = false;

        // Act
        let report = build(&config)?;

        // Assert
        assert!(!config.out(".htaccess").exists());
        assert_eq!(report.artifacts.len(), 4);
        Ok(())
    }

    #[test]
    fn test_missing_page_markup_aborts() -> Result<()> {
        // Arrange
        let (_temp, config) = site()?;
        fs::remove_file(config.html_source())?;

        // Act
        let result = build(&config);

        // Assert
        let err = result.expect_err("Build without page markup should fail");
        assert!(format!("{:#}", err).contains("Failed to read page markup"));
        Ok(())
    }
}
