//! Flowmap parser - Extract a structural model from BPMN 2.0 documents.
//!
//! This crate ingests a BPMN 2.0 process-definition document and produces
//! a normalized structural model: every flow node, every sequence flow,
//! lane/pool assignments, data artifacts, annotations, a deterministic
//! chronological ordering of nodes reachable from start events, and
//! structural-quality warnings.
//!
//! The extraction is tolerant: it is tag/attribute-driven across namespace
//! variants and does not require full schema validity. It is also purely
//! structural: gateway conditions are never evaluated and no token
//! simulation takes place.
//!
//! # Example
//!
//! ```
//! let xml = r#"<definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL">
//!   <process id="p" name="Demo" isExecutable="true">
//!     <startEvent id="start"/>
//!     <task id="work" name="Do the work"/>
//!     <sequenceFlow id="f1" sourceRef="start" targetRef="work"/>
//!   </process>
//! </definitions>"#;
//!
//! let model = flowmap_parser::parse(xml).unwrap();
//! assert_eq!(model.title, "Demo");
//! assert_eq!(model.flow_order[1].path, vec!["f1".to_string()]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Read-only namespace and tag tables
//! - [`error`]: Error types and Result alias
//! - [`types`]: The structural model (Element, SequenceFlow, ...)
//! - [`xml`]: Namespace-aware DOM helpers
//! - [`process`]: Process selection and collaboration pools
//! - [`extract`]: Structural extractors
//! - [`order`]: Cycle-safe flow-order traversal
//! - [`warnings`]: Structural-quality warning detection
//! - [`parser`]: Result assembler (the one-call entry point)
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod order;
pub mod parser;
pub mod process;
pub mod types;
pub mod warnings;
pub mod xml;

// Re-export the main entry points
pub use parser::{parse, parse_with_options, ParseOptions};

// Re-export commonly used items
pub use error::{ParserError, Result};
pub use types::{
    Annotation, BpmnModel, DataArtifact, DataAssociation, Element, ElementType, FlowOrderEntry,
    Pool, SequenceFlow, Warning, WarningKind,
};
