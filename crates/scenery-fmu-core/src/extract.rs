//! Scenery document traversal: find every element carrying a variable-name
//! field, deduplicate by name, and write the name list.

use std::fs;
use std::path::Path;

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, info, warn};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::variable::AnimationVariable;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// The configured variable-name tag.
    Name,
    /// The configured value tag.
    Value,
    Other,
}

/// One open element during the event walk.
struct Frame {
    /// Position of the element's start tag within the document.
    ordinal: usize,
    kind: FieldKind,
    text: String,
    var_name: Option<String>,
    value: Option<String>,
}

impl Frame {
    fn new(ordinal: usize, kind: FieldKind) -> Self {
        Self {
            ordinal,
            kind,
            text: String::new(),
            var_name: None,
            value: None,
        }
    }
}

/// A closed element that carried a variable name, before dedup.
struct Candidate {
    ordinal: usize,
    raw_name: String,
    value: Option<String>,
}

fn classify(tag: &[u8], cfg: &ExportConfig) -> FieldKind {
    if tag == cfg.variable_tag.as_bytes() {
        FieldKind::Name
    } else if tag == cfg.value_tag.as_bytes() {
        FieldKind::Value
    } else {
        FieldKind::Other
    }
}

fn close_frame(frame: Frame, parent: Option<&mut Frame>, candidates: &mut Vec<Candidate>) {
    match frame.kind {
        FieldKind::Name => {
            if let Some(parent) = parent {
                // Only the first name child of an element counts.
                if parent.var_name.is_none() {
                    parent.var_name = Some(frame.text);
                }
            }
        }
        FieldKind::Value => {
            if let Some(parent) = parent {
                if parent.value.is_none() {
                    parent.value = Some(frame.text);
                }
            }
        }
        FieldKind::Other => {
            if let Some(raw_name) = frame.var_name {
                candidates.push(Candidate {
                    ordinal: frame.ordinal,
                    raw_name,
                    value: frame.value,
                });
            }
        }
    }
}

/// Collect the unique animation variables of a scenery document.
///
/// An element at any depth is interesting iff it has a child matching the
/// configured variable tag; its value child must be present. Results are in
/// document order of the elements' start tags, deduplicated by raw name with
/// a first-occurrence-wins policy.
pub fn extract_variables(xml: &str, cfg: &ExportConfig) -> Result<Vec<AnimationVariable>> {
    let mut reader = Reader::from_str(xml);
    let mut frames: Vec<Frame> = Vec::new();
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut next_ordinal = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                frames.push(Frame::new(next_ordinal, classify(e.name().as_ref(), cfg)));
                next_ordinal += 1;
            }
            Event::Empty(ref e) => {
                // Self-closing element: open and close with no text.
                let frame = Frame::new(next_ordinal, classify(e.name().as_ref(), cfg));
                next_ordinal += 1;
                close_frame(frame, frames.last_mut(), &mut candidates);
            }
            Event::End(_) => {
                if let Some(frame) = frames.pop() {
                    close_frame(frame, frames.last_mut(), &mut candidates);
                }
            }
            Event::Text(ref t) => {
                if let Some(top) = frames.last_mut() {
                    top.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(ref t) => {
                if let Some(top) = frames.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(t));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    // Candidates surface in end-tag order; restore the document order of
    // their start tags so nesting cannot reorder them.
    candidates.sort_by_key(|c| c.ordinal);

    let mut unique: IndexMap<String, AnimationVariable> = IndexMap::new();
    for candidate in candidates {
        let value = candidate.value.ok_or_else(|| ExportError::MissingValue {
            variable: candidate.raw_name.clone(),
        })?;
        let var = AnimationVariable::new(candidate.raw_name, value, &cfg.parameter_prefix);
        if var.display_name().trim().is_empty() {
            return Err(ExportError::EmptyName {
                raw_name: var.raw_name,
            });
        }
        match unique.entry(var.raw_name.clone()) {
            Entry::Occupied(kept) => {
                // First occurrence wins; a conflicting later value is worth
                // flagging but must not change the output.
                if kept.get().value != var.value {
                    warn!(
                        "duplicate variable '{}' dropped: keeping start value '{}', ignoring '{}'",
                        var.raw_name,
                        kept.get().value,
                        var.value
                    );
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(var);
            }
        }
    }

    Ok(unique.into_values().collect())
}

/// Extract the animation variables of the scenery file at `input` and write
/// their display names to `output`, one per line, in first-seen order.
///
/// The output file is overwritten when variables were found and left
/// untouched (not created, not truncated) when none were.
pub fn extract_names(
    input: &Path,
    output: &Path,
    cfg: &ExportConfig,
) -> Result<Vec<AnimationVariable>> {
    let xml = fs::read_to_string(input).map_err(|source| ExportError::ReadFile {
        path: input.to_path_buf(),
        source,
    })?;
    let variables = extract_variables(&xml, cfg)?;

    for var in &variables {
        debug!("animation variable: {}", var.display_name());
    }

    if variables.is_empty() {
        info!("no animation variables found in {}", input.display());
        return Ok(variables);
    }

    let mut names = String::new();
    for var in &variables {
        names.push_str(var.display_name());
        names.push('\n');
    }
    fs::write(output, names).map_err(|source| ExportError::WriteFile {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        "found and saved {} variable(s) to {}",
        variables.len(),
        output.display()
    );

    Ok(variables)
}
