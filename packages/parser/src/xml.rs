//! Namespace-aware helpers for navigating BPMN DOM trees.
//!
//! All lookups go through the ordered candidate table in
//! [`config::MODEL_NAMESPACES`]: each candidate is tried in turn and the
//! first one that yields a match wins. Different authoring tools bind
//! different prefixes (or none at all) to the BPMN MODEL URI, and this is
//! the single place that tolerance is implemented.

use roxmltree::Node;

use crate::config;

/// Get the tag name without namespace prefix.
pub fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

fn in_namespace(node: Node<'_, '_>, candidate: Option<&str>) -> bool {
    node.tag_name().namespace() == candidate
}

/// Check whether a node is a MODEL-namespaced element with the given tag,
/// under any namespace candidate.
pub fn is_model_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element()
        && local_name(node) == tag
        && config::MODEL_NAMESPACES
            .iter()
            .any(|candidate| in_namespace(node, *candidate))
}

/// Find the first child element with the given tag name.
///
/// Candidates are consulted in order: a match under the first namespace
/// wins over any match under a later one.
pub fn find_model_child<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    for candidate in config::MODEL_NAMESPACES {
        let found = node
            .children()
            .find(|child| child.is_element() && local_name(*child) == tag && in_namespace(*child, *candidate));
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Find all child elements with the given tag name, in document order.
///
/// The first namespace candidate that yields any match supplies the whole
/// result, mirroring a "try alias A, else alias B" lookup chain.
pub fn model_children<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    for candidate in config::MODEL_NAMESPACES {
        let matches: Vec<_> = node
            .children()
            .filter(|child| {
                child.is_element() && local_name(*child) == tag && in_namespace(*child, *candidate)
            })
            .collect();
        if !matches.is_empty() {
            return matches;
        }
    }
    Vec::new()
}

/// Find all descendant elements with the given tag name, in document
/// order, excluding the node itself.
pub fn model_descendants<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    for candidate in config::MODEL_NAMESPACES {
        let matches: Vec<_> = node
            .descendants()
            .filter(|child| {
                *child != node
                    && child.is_element()
                    && local_name(*child) == tag
                    && in_namespace(*child, *candidate)
            })
            .collect();
        if !matches.is_empty() {
            return matches;
        }
    }
    Vec::new()
}

/// Check whether any descendant carries the given tag, under any
/// namespace candidate.
pub fn has_model_descendant(node: Node<'_, '_>, tag: &str) -> bool {
    node.descendants()
        .any(|child| child != node && is_model_tag(child, tag))
}

/// Get the text content of a node, trimmed (default empty).
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text().map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Trimmed text of the first MODEL-namespaced child with the given tag,
/// filtered to non-empty.
pub fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_model_child(node, tag)
        .map(get_text)
        .filter(|text| !text.is_empty())
}

/// Trimmed text of the first documentation child (default empty).
pub fn documentation_text(node: Node<'_, '_>) -> String {
    child_text(node, "documentation").unwrap_or_default()
}

/// Get an attribute value, defaulting to the empty string.
pub fn attr_or_default<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.attribute(name).unwrap_or_default()
}
