//! FMI 2.0 model description rendering.
//!
//! The document layout is the fixed template a 20-sim co-simulation host
//! expects: a header with model metadata and the configured GUID, one
//! `ScalarVariable` entry per animation variable, and a footer closing the
//! variable list with an empty model structure.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::variable::AnimationVariable;

const HEADER_BEFORE_GUID: &str = "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
     <fmiModelDescription fmiVersion=\"2.0\" modelName=\"model\" guid=\"";

const HEADER_AFTER_GUID: &str = "\" generationTool=\"20-sim\" numberOfEventIndicators=\"0\" \
     copyright=\"Controllab Products B.V.\" license=\"-\">\n\
     <CoSimulation modelIdentifier=\"model\" needsExecutionTool=\"false\" \
     canHandleVariableCommunicationStepSize=\"true\" canInterpolateInputs=\"false\" \
     maxOutputDerivativeOrder=\"0\" canRunAsynchronuously=\"false\" \
     canBeInstantiatedOnlyOncePerProcess=\"true\" canNotUseMemoryManagementFunctions=\"true\" \
     canGetAndSetFMUstate=\"false\" canSerializeFMUstate=\"false\" \
     providesDirectionalDerivative=\"false\" />\n\
     \t<DefaultExperiment startTime=\"0.0\" stopTime=\"1000.0\" />\n\
     \t<ModelVariables>\n";

const FOOTER: &str =
    "\t</ModelVariables>\n\t<ModelStructure></ModelStructure>\n</fmiModelDescription>";

fn scalar_variable_entry(var: &AnimationVariable, idx: usize) -> String {
    // Value references are 1-based, gapless, in sequence order.
    let (variability, causality) = if var.is_parameter {
        ("tunable", "parameter")
    } else {
        ("continuous", "input")
    };
    format!(
        "\t\t<ScalarVariable name=\"{}\" valueReference=\"{}\" variability=\"{}\" causality=\"{}\">\n\
         \t\t\t<Real start=\"{}\" />\n\
         \t\t</ScalarVariable>\n",
        var.display_name().trim(),
        idx + 1,
        variability,
        causality,
        var.value
    )
}

/// Render the complete model description document for the ordered variable
/// list. An empty list yields a valid document with an empty variable
/// section.
pub fn render_model_description(variables: &[AnimationVariable], cfg: &ExportConfig) -> String {
    let mut doc = String::with_capacity(
        HEADER_BEFORE_GUID.len()
            + cfg.guid.len()
            + HEADER_AFTER_GUID.len()
            + FOOTER.len()
            + variables.len() * 160,
    );
    doc.push_str(HEADER_BEFORE_GUID);
    doc.push_str(&cfg.guid);
    doc.push_str(HEADER_AFTER_GUID);
    for (idx, var) in variables.iter().enumerate() {
        doc.push_str(&scalar_variable_entry(var, idx));
    }
    doc.push_str(FOOTER);
    doc
}

/// Render and write the model description to `output`, overwriting any
/// existing file. The document is assembled in memory first so an error
/// cannot leave a partially-written file behind.
pub fn write_model_description(
    variables: &[AnimationVariable],
    output: &Path,
    cfg: &ExportConfig,
) -> Result<()> {
    let doc = render_model_description(variables, cfg);
    fs::write(output, doc).map_err(|source| ExportError::WriteFile {
        path: output.to_path_buf(),
        source,
    })?;
    info!("created model description {}", output.display());
    Ok(())
}
