use anyhow::{Context, Result};
use pagepress::{Config, format_file_size, log, logger};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;
    logger::set_verbose(config.verbose);

    let build_config = config.build_config();
    let report = pagepress::build(&build_config).context("Build failed")?;

    for artifact in &report.artifacts {
        let shown = artifact
            .path
            .strip_prefix(&build_config.output)
            .unwrap_or(&artifact.path);
        log!("size"; "{:<22} {}", shown.display().to_string(), format_file_size(artifact.bytes));
    }
    log!(
        "done";
        "{} written to {}",
        format_file_size(report.total_bytes()),
        build_config.output.display()
    );

    if config.open {
        let index = build_config.output.join("index.html");
        if let Err(e) = open::that(&index) {
            log!("warn"; "Failed to open {}: {}", index.display(), e);
        }
    }

    Ok(())
}
