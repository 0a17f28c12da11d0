//! Id scoping across document components.
//!
//! Acts composed of multiple sub-documents (schedules, annexes) repeat raw
//! ids like `sec_1` in each component. Output ids are qualified by the name
//! of the nearest enclosing named sub-document so they stay unique on one
//! page, falling back to the configured default scope for the main body.

use crate::model::{Document, NodeId};

use super::RenderParams;

/// Element name of a named sub-document container.
const SUB_DOCUMENT: &str = "doc";

/// Compute the globally-qualified identifier for a node's raw id.
///
/// Ancestors are searched nearest-first for a `doc` element carrying a
/// non-empty `name` attribute; unnamed `doc` ancestors do not stop the
/// search. With no such ancestor the `default_id_scope` render parameter
/// applies, and with neither the raw id passes through unqualified.
pub fn scoped_id(doc: &Document, node: NodeId, raw: &str, params: &RenderParams) -> String {
    for ancestor in doc.ancestors(node) {
        if doc.name(ancestor) == Some(SUB_DOCUMENT)
            && let Some(name) = doc.attr(ancestor, "name")
            && !name.is_empty()
        {
            return format!("{}/{}", name, raw);
        }
    }

    if !params.default_id_scope.is_empty() {
        return format!("{}/{}", params.default_id_scope, raw);
    }

    raw.to_string()
}
