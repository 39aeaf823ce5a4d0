//! Flow-order builder.
//!
//! Derives the chronological visitation sequence of nodes reachable from
//! start events. This is a structural ordering only: gateway conditions
//! are never evaluated, and branching ties are broken by extraction
//! (document) order of the outgoing flows.

use std::collections::{HashMap, HashSet};

use crate::types::{BpmnModel, Element, ElementType, FlowOrderEntry};

/// Build the flow order over the merged model.
///
/// Every `startEvent` is an independent traversal root, in extraction
/// order. One visited set is shared across all roots, so each element id
/// appears at most once even when reachable from several roots or through
/// a cycle. Targets that do not exist in the element map are dead ends.
/// No start events means an empty order, not an error.
#[must_use]
pub fn build_flow_order(model: &BpmnModel) -> Vec<FlowOrderEntry> {
    let elements: HashMap<&str, &Element> = model
        .elements
        .iter()
        .map(|e| (e.id.as_str(), e))
        .collect();

    let roots = model
        .elements
        .iter()
        .filter(|e| e.element_type == ElementType::StartEvent)
        .map(|e| e.id.as_str());

    let mut visited: HashSet<&str> = HashSet::new();
    let mut order = Vec::new();

    for root in roots {
        // Depth-first with an explicit stack, so pathologically long chains
        // cannot exhaust the call stack. Each frame carries its own path
        // value; nothing is shared between branches.
        let mut stack: Vec<(&str, Vec<String>)> = vec![(root, Vec::new())];

        while let Some((id, path)) = stack.pop() {
            let Some(element) = elements.get(id) else {
                continue;
            };
            if !visited.insert(id) {
                continue;
            }

            // Outgoing flows in extraction order, pushed in reverse so the
            // stack visits them in document order.
            let outgoing: Vec<_> = model.flows.iter().filter(|f| f.source_ref == id).collect();
            for flow in outgoing.iter().rev() {
                let mut next_path = path.clone();
                next_path.push(flow.id.clone());
                stack.push((flow.target_ref.as_str(), next_path));
            }

            order.push(FlowOrderEntry {
                id: element.id.clone(),
                name: element.name.clone(),
                element_type: element.element_type,
                actor: model.actor(&element.id),
                path,
                documentation: element.documentation.clone(),
                event_definitions: element.event_definitions.clone(),
            });
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SequenceFlow;
    use pretty_assertions::assert_eq;

    fn element(id: &str, element_type: ElementType) -> Element {
        Element {
            id: id.to_string(),
            element_type,
            name: String::new(),
            documentation: String::new(),
            event_definitions: Vec::new(),
            process_id: "p1".to_string(),
        }
    }

    fn flow(id: &str, source: &str, target: &str) -> SequenceFlow {
        SequenceFlow {
            id: id.to_string(),
            name: String::new(),
            source_ref: source.to_string(),
            target_ref: target.to_string(),
            condition: String::new(),
            process_id: "p1".to_string(),
        }
    }

    fn model(elements: Vec<Element>, flows: Vec<SequenceFlow>) -> BpmnModel {
        BpmnModel {
            elements,
            flows,
            ..BpmnModel::default()
        }
    }

    fn ids(order: &[FlowOrderEntry]) -> Vec<&str> {
        order.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_linear_chain_paths_grow_by_one() {
        let model = model(
            vec![
                element("s", ElementType::StartEvent),
                element("t1", ElementType::Task),
                element("t2", ElementType::Task),
                element("e", ElementType::EndEvent),
            ],
            vec![flow("f1", "s", "t1"), flow("f2", "t1", "t2"), flow("f3", "t2", "e")],
        );

        let order = build_flow_order(&model);

        assert_eq!(ids(&order), vec!["s", "t1", "t2", "e"]);
        for (hop, entry) in order.iter().enumerate() {
            assert_eq!(entry.path.len(), hop);
        }
        assert_eq!(order[3].path, vec!["f1", "f2", "f3"]);
    }

    #[test]
    fn test_cycle_terminates_and_visits_target_once() {
        // s -> g -> t -> g (back edge)
        let model = model(
            vec![
                element("s", ElementType::StartEvent),
                element("g", ElementType::ExclusiveGateway),
                element("t", ElementType::Task),
            ],
            vec![flow("f1", "s", "g"), flow("f2", "g", "t"), flow("f3", "t", "g")],
        );

        let order = build_flow_order(&model);

        assert_eq!(ids(&order), vec!["s", "g", "t"]);
        let visits = order.iter().filter(|e| e.id == "g").count();
        assert_eq!(visits, 1);
    }

    #[test]
    fn test_branching_follows_document_order() {
        let model = model(
            vec![
                element("s", ElementType::StartEvent),
                element("g", ElementType::ExclusiveGateway),
                element("a", ElementType::Task),
                element("b", ElementType::Task),
            ],
            vec![flow("f1", "s", "g"), flow("f2", "g", "a"), flow("f3", "g", "b")],
        );

        let order = build_flow_order(&model);

        // f2 was extracted before f3, so a comes before b.
        assert_eq!(ids(&order), vec!["s", "g", "a", "b"]);
        assert_eq!(order[2].path, vec!["f1", "f2"]);
        assert_eq!(order[3].path, vec!["f1", "f3"]);
    }

    #[test]
    fn test_two_roots_yield_disjoint_subsequences() {
        let model = model(
            vec![
                element("s1", ElementType::StartEvent),
                element("a", ElementType::Task),
                element("s2", ElementType::StartEvent),
                element("b", ElementType::Task),
            ],
            vec![flow("f1", "s1", "a"), flow("f2", "s2", "b")],
        );

        let order = build_flow_order(&model);

        assert_eq!(ids(&order), vec!["s1", "a", "s2", "b"]);
        assert!(order[0].path.is_empty());
        assert!(order[2].path.is_empty());
        assert_eq!(order[3].path, vec!["f2"]);
    }

    #[test]
    fn test_nonexistent_target_is_a_dead_end() {
        let model = model(
            vec![element("s", ElementType::StartEvent)],
            vec![flow("f1", "s", "ghost")],
        );

        let order = build_flow_order(&model);
        assert_eq!(ids(&order), vec!["s"]);
    }

    #[test]
    fn test_no_start_events_yields_empty_order() {
        let model = model(
            vec![element("t", ElementType::Task)],
            vec![flow("f1", "t", "t")],
        );
        assert!(build_flow_order(&model).is_empty());
    }

    #[test]
    fn test_actor_comes_from_lane_assignment() {
        let mut model = model(
            vec![
                element("s", ElementType::StartEvent),
                element("t", ElementType::Task),
            ],
            vec![flow("f1", "s", "t")],
        );
        model.lanes.insert("t".to_string(), "Back Office".to_string());

        let order = build_flow_order(&model);

        assert_eq!(order[0].actor, "N/A");
        assert_eq!(order[1].actor, "Back Office");
    }
}
