//! Constant tables driving the tolerant BPMN extraction.
//!
//! Everything tag- or namespace-driven lives here as data, so supporting
//! another authoring tool is a table edit rather than new branching logic.

/// BPMN MODEL namespace candidates, consulted in order.
///
/// Authoring tools bind different prefixes to the BPMN MODEL URI, and some
/// minimal exports omit the namespace entirely. Every lookup by tag name
/// tries each candidate in order and takes the first one that matches, so
/// a tool-specific namespace is a one-line addition here.
pub const MODEL_NAMESPACES: &[Option<&str>] = &[
    Some("http://www.omg.org/spec/BPMN/20100524/MODEL"),
    None,
];

/// Every flow-node tag recognized by the extractor.
///
/// A process counts as having content when any of these occurs anywhere
/// beneath it.
pub const FLOW_NODE_TAGS: &[&str] = &[
    "startEvent",
    "endEvent",
    "intermediateThrowEvent",
    "intermediateCatchEvent",
    "boundaryEvent",
    "task",
    "userTask",
    "serviceTask",
    "manualTask",
    "scriptTask",
    "businessRuleTask",
    "sendTask",
    "receiveTask",
    "exclusiveGateway",
    "parallelGateway",
    "inclusiveGateway",
    "eventBasedGateway",
    "complexGateway",
    "subProcess",
    "callActivity",
];

/// Event-definition child tags carried by event elements.
pub const EVENT_DEFINITION_TAGS: &[&str] = &[
    "messageEventDefinition",
    "timerEventDefinition",
    "errorEventDefinition",
    "signalEventDefinition",
    "conditionalEventDefinition",
    "linkEventDefinition",
];

/// Suffix stripped from event-definition tags for the short name.
pub const EVENT_DEFINITION_SUFFIX: &str = "EventDefinition";

/// Title used when the first kept process carries no name attribute.
pub const DEFAULT_PROCESS_NAME: &str = "Unnamed Process";

/// Name used for participants without a name attribute.
pub const DEFAULT_POOL_NAME: &str = "Unnamed Pool";

/// Name used for lanes without a name attribute.
pub const DEFAULT_LANE_NAME: &str = "Unnamed Lane";

/// Name used for data store references without a name attribute.
pub const DEFAULT_DATA_STORE_NAME: &str = "Unnamed Data Store";

/// Name used for data object references without a name attribute.
pub const DEFAULT_DATA_OBJECT_NAME: &str = "Unnamed Data Object";

/// Actor shown for flow-order entries with no lane assignment.
pub const NO_ACTOR: &str = "N/A";
