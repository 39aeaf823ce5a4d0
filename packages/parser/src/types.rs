//! Core data types for the structural model.
//!
//! Everything here is built once per parse invocation and immutable
//! afterwards. Id-keyed collections are kept in extraction (document)
//! order and serialize as JSON maps in that order, so identical input
//! always produces byte-identical output.

use std::collections::BTreeMap;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::config;

/// The enumerated flow-node kinds that can participate in sequence flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    StartEvent,
    EndEvent,
    IntermediateThrowEvent,
    IntermediateCatchEvent,
    BoundaryEvent,
    Task,
    UserTask,
    ServiceTask,
    ManualTask,
    ScriptTask,
    BusinessRuleTask,
    SendTask,
    ReceiveTask,
    ExclusiveGateway,
    ParallelGateway,
    InclusiveGateway,
    EventBasedGateway,
    ComplexGateway,
    SubProcess,
    CallActivity,
}

impl ElementType {
    /// Parse from a BPMN tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "startEvent" => Some(Self::StartEvent),
            "endEvent" => Some(Self::EndEvent),
            "intermediateThrowEvent" => Some(Self::IntermediateThrowEvent),
            "intermediateCatchEvent" => Some(Self::IntermediateCatchEvent),
            "boundaryEvent" => Some(Self::BoundaryEvent),
            "task" => Some(Self::Task),
            "userTask" => Some(Self::UserTask),
            "serviceTask" => Some(Self::ServiceTask),
            "manualTask" => Some(Self::ManualTask),
            "scriptTask" => Some(Self::ScriptTask),
            "businessRuleTask" => Some(Self::BusinessRuleTask),
            "sendTask" => Some(Self::SendTask),
            "receiveTask" => Some(Self::ReceiveTask),
            "exclusiveGateway" => Some(Self::ExclusiveGateway),
            "parallelGateway" => Some(Self::ParallelGateway),
            "inclusiveGateway" => Some(Self::InclusiveGateway),
            "eventBasedGateway" => Some(Self::EventBasedGateway),
            "complexGateway" => Some(Self::ComplexGateway),
            "subProcess" => Some(Self::SubProcess),
            "callActivity" => Some(Self::CallActivity),
            _ => None,
        }
    }

    /// Get the BPMN tag name.
    #[must_use]
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::StartEvent => "startEvent",
            Self::EndEvent => "endEvent",
            Self::IntermediateThrowEvent => "intermediateThrowEvent",
            Self::IntermediateCatchEvent => "intermediateCatchEvent",
            Self::BoundaryEvent => "boundaryEvent",
            Self::Task => "task",
            Self::UserTask => "userTask",
            Self::ServiceTask => "serviceTask",
            Self::ManualTask => "manualTask",
            Self::ScriptTask => "scriptTask",
            Self::BusinessRuleTask => "businessRuleTask",
            Self::SendTask => "sendTask",
            Self::ReceiveTask => "receiveTask",
            Self::ExclusiveGateway => "exclusiveGateway",
            Self::ParallelGateway => "parallelGateway",
            Self::InclusiveGateway => "inclusiveGateway",
            Self::EventBasedGateway => "eventBasedGateway",
            Self::ComplexGateway => "complexGateway",
            Self::SubProcess => "subProcess",
            Self::CallActivity => "callActivity",
        }
    }

    /// True for event kinds, the only kinds that carry event definitions.
    #[must_use]
    pub fn is_event(&self) -> bool {
        matches!(
            self,
            Self::StartEvent
                | Self::EndEvent
                | Self::IntermediateThrowEvent
                | Self::IntermediateCatchEvent
                | Self::BoundaryEvent
        )
    }
}

/// A single flow node extracted from a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Unique id within the merged model.
    pub id: String,

    /// Flow-node kind.
    #[serde(rename = "type")]
    pub element_type: ElementType,

    /// Display name (default empty).
    pub name: String,

    /// Trimmed text of the first documentation child (default empty).
    pub documentation: String,

    /// Short names of event definitions present on event elements
    /// (e.g. "message", "timer"). Empty for non-events.
    pub event_definitions: Vec<String>,

    /// Id of the owning process.
    pub process_id: String,
}

/// A directed edge between two flow nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceFlow {
    /// Unique id within the merged model.
    pub id: String,

    /// Display name (default empty).
    pub name: String,

    /// Id of the source element. Expected but not verified to exist.
    pub source_ref: String,

    /// Id of the target element. Expected but not verified to exist.
    pub target_ref: String,

    /// Trimmed condition expression text (default empty).
    pub condition: String,

    /// Id of the owning process.
    pub process_id: String,
}

/// A participant pool, present only when the document declares a
/// collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    pub name: String,
    pub process_ref: String,
}

/// Kind of data artifact reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataArtifactKind {
    Store,
    Object,
}

/// A data store or data object reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataArtifact {
    pub id: String,
    pub name: String,

    /// Backing reference attribute (default empty).
    pub reference: String,

    pub kind: DataArtifactKind,
}

/// Direction of a data association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationDirection {
    Input,
    Output,
}

/// A directed link between a flow node and a data artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAssociation {
    pub direction: AssociationDirection,

    /// Id of the owning flow node.
    pub element_id: String,

    /// External source id (empty when not declared).
    pub source: String,

    /// External target id (empty when not declared).
    pub target: String,
}

/// A free-text note, optionally linked to a flow node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub text: String,

    /// Opposite endpoint of the first association edge touching this
    /// annotation, if any.
    pub element: Option<String>,
}

/// One visited node in the chronological flow order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowOrderEntry {
    pub id: String,
    pub name: String,

    #[serde(rename = "type")]
    pub element_type: ElementType,

    /// Lane name, or "N/A" when the element has no lane assignment.
    pub actor: String,

    /// Ordered sequence-flow ids from the entry's start event to this
    /// node. Empty for the start event itself.
    pub path: Vec<String>,

    pub documentation: String,
    pub event_definitions: Vec<String>,
}

/// Structural-quality warning categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    DisconnectedElements,
    UnassignedLanes,
    DanglingFlows,
}

/// A structural-quality warning over the merged model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,

    /// Human-readable, count-bearing message.
    pub message: String,

    /// Sorted ids of the offending elements (or flows for
    /// `dangling_flows`).
    pub elements: Vec<String>,
}

/// Per-process identification carried into the merged result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub id: String,
    pub name: String,
    pub documentation: String,
}

/// Id-keyed lookup for collections serialized as JSON maps.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Element {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for SequenceFlow {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for DataArtifact {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Serialize a vec as a map keyed by id, preserving extraction order.
fn serialize_keyed<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize + Keyed,
{
    serializer.collect_map(items.iter().map(|item| (item.key(), item)))
}

/// Upsert into an id-keyed vec: the later definition wins but keeps the
/// original position, and the collision is logged.
pub(crate) fn upsert_keyed<T: Keyed>(items: &mut Vec<T>, item: T, what: &str) {
    if let Some(existing) = items.iter_mut().find(|e| e.key() == item.key()) {
        tracing::warn!(
            id = existing.key(),
            what,
            "duplicate id in merged model, keeping the later definition"
        );
        *existing = item;
    } else {
        items.push(item);
    }
}

/// The assembled structural model of one BPMN document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BpmnModel {
    /// Name of the first kept process (default "Unnamed Process").
    pub title: String,

    /// Documentation text of the first kept process (default empty).
    pub objective: String,

    /// Id, name, and documentation of every kept process.
    pub processes: Vec<ProcessInfo>,

    /// All flow nodes, keyed by id in extraction order.
    #[serde(serialize_with = "serialize_keyed")]
    pub elements: Vec<Element>,

    /// All sequence flows, keyed by id in extraction order.
    #[serde(serialize_with = "serialize_keyed")]
    pub flows: Vec<SequenceFlow>,

    /// Element id to lane name; the last lane processed wins.
    pub lanes: BTreeMap<String, String>,

    /// Collaboration participants, if declared.
    pub pools: Vec<Pool>,

    #[serde(serialize_with = "serialize_keyed")]
    pub data_stores: Vec<DataArtifact>,

    #[serde(serialize_with = "serialize_keyed")]
    pub data_objects: Vec<DataArtifact>,

    pub data_associations: Vec<DataAssociation>,

    pub annotations: Vec<Annotation>,

    /// Chronological visitation order of nodes reachable from start
    /// events. Each element id appears at most once.
    pub flow_order: Vec<FlowOrderEntry>,

    pub warnings: Vec<Warning>,
}

impl BpmnModel {
    /// Create an empty model with top-level title and objective.
    #[must_use]
    pub fn new(title: impl Into<String>, objective: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            objective: objective.into(),
            ..Self::default()
        }
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Look up a sequence flow by id.
    #[must_use]
    pub fn flow(&self, id: &str) -> Option<&SequenceFlow> {
        self.flows.iter().find(|f| f.id == id)
    }

    /// Actor for an element: its lane name, or "N/A" when unassigned.
    #[must_use]
    pub fn actor(&self, element_id: &str) -> String {
        self.lanes
            .get(element_id)
            .cloned()
            .unwrap_or_else(|| config::NO_ACTOR.to_string())
    }

    pub(crate) fn insert_element(&mut self, element: Element) {
        upsert_keyed(&mut self.elements, element, "element");
    }

    pub(crate) fn insert_flow(&mut self, flow: SequenceFlow) {
        upsert_keyed(&mut self.flows, flow, "sequence flow");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_element_type_from_tag_round_trip() {
        for tag in crate::config::FLOW_NODE_TAGS {
            let parsed = ElementType::from_tag(tag);
            assert!(parsed.is_some(), "unrecognized tag {tag}");
            assert_eq!(parsed.map(|t| t.as_tag()), Some(*tag));
        }
        assert_eq!(ElementType::from_tag("notANode"), None);
    }

    #[test]
    fn test_element_type_is_event() {
        assert!(ElementType::StartEvent.is_event());
        assert!(ElementType::BoundaryEvent.is_event());
        assert!(!ElementType::UserTask.is_event());
        assert!(!ElementType::ExclusiveGateway.is_event());
    }

    #[test]
    fn test_element_type_serializes_as_tag_name() {
        let json = serde_json::to_string(&ElementType::IntermediateCatchEvent).expect("json");
        assert_eq!(json, "\"intermediateCatchEvent\"");
    }

    #[test]
    fn test_warning_kind_serialization() {
        let json = serde_json::to_string(&WarningKind::DisconnectedElements).expect("json");
        assert_eq!(json, "\"disconnected_elements\"");
        let json = serde_json::to_string(&WarningKind::DanglingFlows).expect("json");
        assert_eq!(json, "\"dangling_flows\"");
    }

    #[test]
    fn test_insert_element_duplicate_keeps_later_definition() {
        let mut model = BpmnModel::default();
        model.insert_element(element("a", ElementType::Task));
        model.insert_element(element("b", ElementType::Task));
        model.insert_element(element("a", ElementType::UserTask));

        assert_eq!(model.elements.len(), 2);
        // Later definition wins but keeps the original position.
        assert_eq!(model.elements[0].element_type, ElementType::UserTask);
        assert_eq!(model.elements[1].id, "b");
    }

    #[test]
    fn test_elements_serialize_as_map_in_extraction_order() {
        let mut model = BpmnModel::default();
        model.insert_element(element("zeta", ElementType::StartEvent));
        model.insert_element(element("alpha", ElementType::EndEvent));

        let json = serde_json::to_string(&model).expect("json");
        let zeta = json.find("\"zeta\"").expect("zeta present");
        let alpha = json.find("\"alpha\"").expect("alpha present");
        assert!(zeta < alpha, "extraction order must survive serialization");
    }

    #[test]
    fn test_actor_defaults_to_sentinel() {
        let mut model = BpmnModel::default();
        model
            .lanes
            .insert("a".to_string(), "Back Office".to_string());

        assert_eq!(model.actor("a"), "Back Office");
        assert_eq!(model.actor("b"), "N/A");
    }
}
