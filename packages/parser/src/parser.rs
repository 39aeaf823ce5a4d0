//! Result assembler: one call in, one merged structural model out.
//!
//! The core is a pure synchronous function. Each invocation builds its own
//! maps and visited set from scratch, so concurrent calls never share
//! state beyond the read-only tables in [`crate::config`].

use roxmltree::Document;

use crate::error::Result;
use crate::types::{BpmnModel, ProcessInfo};
use crate::{extract, order, process, warnings, xml};

/// Knobs for the extraction pass.
///
/// Both the single-process and multi-process behaviors found in the wild
/// run through the same extraction code; this only chooses how many of the
/// kept processes feed the merged model.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Restrict extraction to the first kept process, for exports where
    /// only the primary pool matters.
    pub first_process_only: bool,
}

/// Parse a BPMN document into its structural model.
///
/// # Errors
/// [`crate::ParserError::XmlParse`] on malformed markup (no partial model
/// is ever returned), [`crate::ParserError::NoValidProcess`] when no
/// process qualifies.
///
/// # Examples
/// ```
/// let xml = r#"<definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL">
///   <process id="p" name="Demo" isExecutable="true">
///     <startEvent id="s"/>
///   </process>
/// </definitions>"#;
///
/// let model = flowmap_parser::parse(xml).unwrap();
/// assert_eq!(model.title, "Demo");
/// assert_eq!(model.flow_order.len(), 1);
/// ```
pub fn parse(text: &str) -> Result<BpmnModel> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse with explicit [`ParseOptions`].
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<BpmnModel> {
    let doc = Document::parse(text)?;
    let selection = process::select_processes(&doc)?;

    let kept = if options.first_process_only {
        &selection.processes[..1]
    } else {
        &selection.processes[..]
    };

    let mut model = BpmnModel::new(selection.title, selection.objective);
    model.pools = selection.pools;

    for process in kept {
        let process_id = xml::attr_or_default(*process, "id").to_string();
        model.processes.push(ProcessInfo {
            id: process_id.clone(),
            name: xml::attr_or_default(*process, "name").to_string(),
            documentation: xml::documentation_text(*process),
        });

        extract::extract_elements(*process, &process_id, &mut model);
        extract::extract_flows(*process, &process_id, &mut model);
        extract::extract_lanes(*process, &mut model);
        extract::extract_data_artifacts(*process, &mut model);
        extract::extract_data_associations(*process, &mut model);
        extract::extract_annotations(*process, &mut model);
    }

    model.flow_order = order::build_flow_order(&model);
    model.warnings = warnings::detect_warnings(&model);

    tracing::debug!(
        elements = model.elements.len(),
        flows = model.flows.len(),
        reachable = model.flow_order.len(),
        warnings = model.warnings.len(),
        "assembled structural model"
    );

    Ok(model)
}
