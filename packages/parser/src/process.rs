//! Process selection and collaboration handling.
//!
//! Some export tools leave decorative empty processes behind; a process is
//! only kept when it is marked executable or actually contains flow nodes.

use roxmltree::{Document, Node};

use crate::config;
use crate::error::{ParserError, Result};
use crate::types::Pool;
use crate::xml;

/// Processes kept for extraction plus document-level context.
#[derive(Debug)]
pub struct Selection<'a, 'input> {
    /// Kept process elements, in document order.
    pub processes: Vec<Node<'a, 'input>>,

    /// Name of the first kept process (default "Unnamed Process").
    pub title: String,

    /// Documentation of the first kept process (default empty).
    pub objective: String,

    /// Collaboration participants, independent of process filtering.
    pub pools: Vec<Pool>,
}

/// Select the real processes of a document.
///
/// A process is kept iff its `isExecutable` attribute is `"true"` or any
/// enumerated flow-node tag occurs beneath it.
///
/// # Errors
/// [`ParserError::NoValidProcess`] when no process qualifies.
pub fn select_processes<'a, 'input>(doc: &'a Document<'input>) -> Result<Selection<'a, 'input>> {
    let root = doc.root_element();

    let mut kept = Vec::new();
    for process in xml::model_descendants(root, "process") {
        let executable = process.attribute("isExecutable") == Some("true");
        let has_content = config::FLOW_NODE_TAGS
            .iter()
            .any(|tag| xml::has_model_descendant(process, tag));

        if executable || has_content {
            kept.push(process);
        } else {
            tracing::debug!(
                id = xml::attr_or_default(process, "id"),
                "discarding empty non-executable process"
            );
        }
    }

    if kept.is_empty() {
        return Err(ParserError::NoValidProcess);
    }

    let first = kept[0];
    let title = first
        .attribute("name")
        .unwrap_or(config::DEFAULT_PROCESS_NAME)
        .to_string();
    let objective = xml::documentation_text(first);

    Ok(Selection {
        processes: kept,
        title,
        objective,
        pools: extract_pools(root),
    })
}

/// Read collaboration participants into pool records.
fn extract_pools(root: Node<'_, '_>) -> Vec<Pool> {
    let mut pools = Vec::new();
    for collaboration in xml::model_descendants(root, "collaboration") {
        for participant in xml::model_children(collaboration, "participant") {
            let Some(id) = participant.attribute("id") else {
                continue;
            };
            pools.push(Pool {
                id: id.to_string(),
                name: participant
                    .attribute("name")
                    .unwrap_or(config::DEFAULT_POOL_NAME)
                    .to_string(),
                process_ref: xml::attr_or_default(participant, "processRef").to_string(),
            });
        }
    }
    pools
}
