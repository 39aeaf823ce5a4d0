//! Structural extractors.
//!
//! Each extractor independently walks one kept process subtree and fills
//! its slice of the model. They are order-independent among themselves;
//! the assembler runs them over every kept process, which is the single
//! canonical implementation for both the single-process and multi-process
//! cases.
//!
//! Elements and flows without an id attribute are skipped without being
//! reported; optional fields default to empty rather than failing.

use roxmltree::Node;

use crate::config;
use crate::types::{
    Annotation, AssociationDirection, BpmnModel, DataArtifact, DataArtifactKind, DataAssociation,
    Element, ElementType, SequenceFlow,
};
use crate::xml;

/// Extract every recognized flow node beneath a process.
pub fn extract_elements(process: Node<'_, '_>, process_id: &str, model: &mut BpmnModel) {
    for tag in config::FLOW_NODE_TAGS {
        let Some(element_type) = ElementType::from_tag(tag) else {
            continue;
        };
        for node in xml::model_descendants(process, tag) {
            let Some(id) = node.attribute("id") else {
                tracing::debug!(tag, "skipping flow node without id");
                continue;
            };
            let event_definitions = if element_type.is_event() {
                event_definitions(node)
            } else {
                Vec::new()
            };
            model.insert_element(Element {
                id: id.to_string(),
                element_type,
                name: xml::attr_or_default(node, "name").to_string(),
                documentation: xml::documentation_text(node),
                event_definitions,
                process_id: process_id.to_string(),
            });
        }
    }
}

/// Short names of the event definitions present on an event element.
fn event_definitions(node: Node<'_, '_>) -> Vec<String> {
    config::EVENT_DEFINITION_TAGS
        .iter()
        .filter(|tag| xml::find_model_child(node, tag).is_some())
        .map(|tag| {
            tag.strip_suffix(config::EVENT_DEFINITION_SUFFIX)
                .unwrap_or(tag)
                .to_string()
        })
        .collect()
}

/// Extract every sequence flow beneath a process.
pub fn extract_flows(process: Node<'_, '_>, process_id: &str, model: &mut BpmnModel) {
    for node in xml::model_descendants(process, "sequenceFlow") {
        let Some(id) = node.attribute("id") else {
            tracing::debug!("skipping sequence flow without id");
            continue;
        };
        model.insert_flow(SequenceFlow {
            id: id.to_string(),
            name: xml::attr_or_default(node, "name").to_string(),
            source_ref: xml::attr_or_default(node, "sourceRef").to_string(),
            target_ref: xml::attr_or_default(node, "targetRef").to_string(),
            condition: xml::child_text(node, "conditionExpression").unwrap_or_default(),
            process_id: process_id.to_string(),
        });
    }
}

/// Map flow nodes to lane names. Later lanes overwrite earlier ones for
/// the same node id.
pub fn extract_lanes(process: Node<'_, '_>, model: &mut BpmnModel) {
    for lane_set in xml::model_descendants(process, "laneSet") {
        for lane in xml::model_children(lane_set, "lane") {
            let lane_name = lane.attribute("name").unwrap_or(config::DEFAULT_LANE_NAME);
            for node_ref in xml::model_children(lane, "flowNodeRef") {
                let id = xml::get_text(node_ref);
                if id.is_empty() {
                    continue;
                }
                model.lanes.insert(id, lane_name.to_string());
            }
        }
    }
}

/// Extract data store and data object references.
pub fn extract_data_artifacts(process: Node<'_, '_>, model: &mut BpmnModel) {
    for node in xml::model_descendants(process, "dataStoreReference") {
        let Some(id) = node.attribute("id") else {
            continue;
        };
        crate::types::upsert_keyed(
            &mut model.data_stores,
            DataArtifact {
                id: id.to_string(),
                name: node
                    .attribute("name")
                    .unwrap_or(config::DEFAULT_DATA_STORE_NAME)
                    .to_string(),
                reference: xml::attr_or_default(node, "dataStoreRef").to_string(),
                kind: DataArtifactKind::Store,
            },
            "data store",
        );
    }

    for node in xml::model_descendants(process, "dataObjectReference") {
        let Some(id) = node.attribute("id") else {
            continue;
        };
        crate::types::upsert_keyed(
            &mut model.data_objects,
            DataArtifact {
                id: id.to_string(),
                name: node
                    .attribute("name")
                    .unwrap_or(config::DEFAULT_DATA_OBJECT_NAME)
                    .to_string(),
                reference: xml::attr_or_default(node, "dataObjectRef").to_string(),
                kind: DataArtifactKind::Object,
            },
            "data object",
        );
    }
}

/// Extract data input/output associations owned by identified elements.
pub fn extract_data_associations(process: Node<'_, '_>, model: &mut BpmnModel) {
    for node in process.descendants().filter(|n| n.is_element()) {
        let Some(owner) = node.attribute("id") else {
            continue;
        };

        for assoc in xml::model_children(node, "dataInputAssociation") {
            let Some(source) = xml::child_text(assoc, "sourceRef") else {
                continue;
            };
            model.data_associations.push(DataAssociation {
                direction: AssociationDirection::Input,
                element_id: owner.to_string(),
                source,
                target: xml::child_text(assoc, "targetRef").unwrap_or_default(),
            });
        }

        for assoc in xml::model_children(node, "dataOutputAssociation") {
            let Some(target) = xml::child_text(assoc, "targetRef") else {
                continue;
            };
            model.data_associations.push(DataAssociation {
                direction: AssociationDirection::Output,
                element_id: owner.to_string(),
                source: xml::child_text(assoc, "sourceRef").unwrap_or_default(),
                target,
            });
        }
    }
}

/// Extract text annotations and resolve their associated element.
pub fn extract_annotations(process: Node<'_, '_>, model: &mut BpmnModel) {
    for note in xml::model_descendants(process, "textAnnotation") {
        let Some(id) = note.attribute("id") else {
            continue;
        };
        let Some(text) = xml::child_text(note, "text") else {
            continue;
        };
        model.annotations.push(Annotation {
            id: id.to_string(),
            text,
            element: associated_element(process, id),
        });
    }
}

/// Opposite endpoint of the first association edge touching the
/// annotation, if any.
fn associated_element(process: Node<'_, '_>, annotation_id: &str) -> Option<String> {
    for assoc in xml::model_descendants(process, "association") {
        let source = assoc.attribute("sourceRef");
        let target = assoc.attribute("targetRef");
        if source == Some(annotation_id) {
            return target.map(str::to_string);
        }
        if target == Some(annotation_id) {
            return source.map(str::to_string);
        }
    }
    None
}
