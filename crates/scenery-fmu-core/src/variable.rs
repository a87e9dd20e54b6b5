//! The animation-variable value object shared by the extractor and the
//! model description builder.

/// One distinct animation variable discovered in the scenery document.
///
/// Immutable after construction; the extractor guarantees `raw_name` is
/// unique within one run and that the display name is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationVariable {
    /// Name as found in the source, possibly carrying the parameter prefix.
    pub raw_name: String,
    /// Textual initial value, verbatim from the source. Never parsed as a
    /// number so the description round-trips the author's exact text.
    pub value: String,
    /// True iff `raw_name` starts with the parameter prefix.
    pub is_parameter: bool,
    display_name: String,
}

impl AnimationVariable {
    pub fn new(raw_name: String, value: String, parameter_prefix: &str) -> Self {
        let is_parameter = !parameter_prefix.is_empty() && raw_name.starts_with(parameter_prefix);
        let display_name = if is_parameter {
            raw_name[parameter_prefix.len()..].to_string()
        } else {
            raw_name.clone()
        };
        Self {
            raw_name,
            value,
            is_parameter,
            display_name,
        }
    }

    /// Name as written to the outputs: the raw name with the parameter
    /// prefix stripped when present.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
