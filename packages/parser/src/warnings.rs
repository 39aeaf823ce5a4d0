//! Structural-quality warning detection.
//!
//! Runs once over the fully merged model; the checks are independent of
//! each other and of flow order. A warning is only emitted when its set of
//! offending ids is non-empty.

use std::collections::HashSet;

use crate::types::{BpmnModel, Warning, WarningKind};

/// Detect structural-quality warnings over the merged model.
#[must_use]
pub fn detect_warnings(model: &BpmnModel) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let connected: HashSet<&str> = model
        .flows
        .iter()
        .flat_map(|f| [f.source_ref.as_str(), f.target_ref.as_str()])
        .collect();

    let mut disconnected: Vec<String> = model
        .elements
        .iter()
        .filter(|e| !connected.contains(e.id.as_str()))
        .map(|e| e.id.clone())
        .collect();
    disconnected.sort();
    if !disconnected.is_empty() {
        warnings.push(Warning {
            kind: WarningKind::DisconnectedElements,
            message: format!(
                "{} element(s) are not connected by any sequence flow",
                disconnected.len()
            ),
            elements: disconnected,
        });
    }

    let mut unassigned: Vec<String> = model
        .elements
        .iter()
        .filter(|e| !model.lanes.contains_key(&e.id))
        .map(|e| e.id.clone())
        .collect();
    unassigned.sort();
    if !unassigned.is_empty() {
        warnings.push(Warning {
            kind: WarningKind::UnassignedLanes,
            message: format!("{} element(s) are not assigned to any lane", unassigned.len()),
            elements: unassigned,
        });
    }

    let element_ids: HashSet<&str> = model.elements.iter().map(|e| e.id.as_str()).collect();
    let mut dangling: Vec<String> = model
        .flows
        .iter()
        .filter(|f| {
            !element_ids.contains(f.source_ref.as_str())
                || !element_ids.contains(f.target_ref.as_str())
        })
        .map(|f| f.id.clone())
        .collect();
    dangling.sort();
    if !dangling.is_empty() {
        warnings.push(Warning {
            kind: WarningKind::DanglingFlows,
            message: format!(
                "{} sequence flow(s) reference elements that do not exist",
                dangling.len()
            ),
            elements: dangling,
        });
    }

    warnings
}
