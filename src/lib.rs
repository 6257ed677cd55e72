//! Production build for a static event landing page.

mod bundle;
mod config;
mod copy;
mod critical;
mod dirs;
mod htaccess;
mod html;
pub mod logger;
mod minify;
mod pipeline;
mod util;

pub use bundle::{Bundle, bundle};
pub use config::{BuildConfig, CRITICAL_CSS, CSS_BUNDLE, Config, JS_BUNDLE};
pub use copy::copy_dir;
pub use critical::extract_critical;
pub use dirs::{OUTPUT_SUBDIRS, init_output_dirs};
pub use htaccess::{HTACCESS, write_htaccess};
pub use html::rewrite_html;
pub use minify::{minify_css, minify_js, strip_line_comments};
pub use pipeline::{Artifact, BuildReport, build};
pub use util::format_file_size;
