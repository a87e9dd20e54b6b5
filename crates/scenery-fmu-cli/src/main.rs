//! Command-line entry point for the scenery-to-FMU exporter.
//!
//! Takes no arguments: the run is driven entirely by deploy-time
//! configuration. `scenery-fmu.json` in the working directory, when present,
//! overrides the documented defaults (partially or in full). Logging is
//! controlled through `RUST_LOG`.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use scenery_fmu::{run_export, ExportConfig};

const CONFIG_FILE: &str = "scenery-fmu.json";

fn load_config() -> Result<ExportConfig> {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Ok(ExportConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {CONFIG_FILE}"))?;
    let cfg = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {CONFIG_FILE}"))?;
    debug!("using configuration overrides from {CONFIG_FILE}");
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let cfg = load_config()?;
    let summary = run_export(&cfg)?;
    info!(
        "export finished: {} variable(s), names file {}",
        summary.variables,
        if summary.names_written {
            "written"
        } else {
            "skipped (no variables found)"
        }
    );
    Ok(())
}
