//! Deploy-time configuration for the exporter.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fixed deploy-time constants for one export run: input/output locations,
/// the field tags scanned for in the scenery document, the parameter prefix,
/// and the GUID stamped into the model description header.
///
/// Every field has a documented default; a partial JSON override keeps the
/// defaults for anything it leaves out.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// 3D scenery document scanned for animation variables.
    pub scenery_path: PathBuf,
    /// Plain-text list of discovered variable names, one per line.
    /// Not created or overwritten when no variables are found.
    pub names_path: PathBuf,
    /// FMI 2.0 model description consumed by the co-simulation host.
    pub description_path: PathBuf,
    /// Element tag whose text is a variable name.
    pub variable_tag: String,
    /// Element tag whose text is the variable's initial value.
    pub value_tag: String,
    /// Names starting with this prefix become tunable model parameters;
    /// the prefix is stripped from the emitted name.
    pub parameter_prefix: String,
    /// GUID embedded in the model description header.
    pub guid: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scenery_path: PathBuf::from("fmu_sources/resources/scenery.scn"),
            names_path: PathBuf::from("fmu_sources/resources/scenery.txt"),
            description_path: PathBuf::from("fmu_sources/modelDescription.xml"),
            variable_tag: "VariableName".to_string(),
            value_tag: "Value".to_string(),
            parameter_prefix: "parameters.".to_string(),
            guid: "{d96e2f1e-691f-4e9b-b695-e99129089798}".to_string(),
        }
    }
}
