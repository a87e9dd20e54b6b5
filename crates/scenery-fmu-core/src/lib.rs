//! scenery-fmu core
//!
//! Extracts animation variable names and initial values from a 3D scenery
//! document and renders an FMI 2.0 model description that exposes them as
//! scalar inputs and parameters for a co-simulation host.
//!
//! The pipeline is a single linear transform: parse the scenery XML, collect
//! every element carrying a variable-name field, deduplicate by name (first
//! occurrence wins, insertion order preserved), classify by the parameter
//! prefix, then write the name list and the model description.

pub mod config;
pub mod error;
pub mod extract;
pub mod model_description;
pub mod variable;

pub use config::ExportConfig;
pub use error::{ExportError, Result};
pub use extract::{extract_names, extract_variables};
pub use model_description::{render_model_description, write_model_description};
pub use variable::AnimationVariable;

/// Outcome of one export run, for host logging.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportSummary {
    /// Unique animation variables discovered in the scenery document.
    pub variables: usize,
    /// Whether the names file was written (skipped when nothing was found).
    pub names_written: bool,
}

/// Run the full export with the given configuration.
///
/// The extractor completes fully, including its names-file write, before the
/// model description is rendered; the description is always produced, even
/// for an empty variable list.
pub fn run_export(cfg: &ExportConfig) -> Result<ExportSummary> {
    let variables = extract::extract_names(&cfg.scenery_path, &cfg.names_path, cfg)?;
    model_description::write_model_description(&variables, &cfg.description_path, cfg)?;
    Ok(ExportSummary {
        variables: variables.len(),
        names_written: !variables.is_empty(),
    })
}
