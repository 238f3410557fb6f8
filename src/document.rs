//! Loading of variable buffer documents
//!
//! A buffer document is an XML tree carrying `Variable` elements at any
//! nesting depth. Each variable may declare a `Path` attribute naming it and
//! an `InitialValue` attribute holding its exported value; variables missing
//! either attribute are skipped.

use crate::error::{BufdiffError, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Element tag recognized as a variable declaration
const VARIABLE_TAG: &str = "Variable";

/// Attribute naming the variable
const PATH_ATTR: &str = "Path";

/// Attribute holding the variable's exported value
const INITIAL_VALUE_ATTR: &str = "InitialValue";

/// Flat mapping from variable path to its exported value, in document order
pub type VariableMap = IndexMap<String, String>;

/// Load a buffer document from disk into a [`VariableMap`].
///
/// Fails with [`BufdiffError::MalformedDocument`] when the file cannot be
/// read or does not parse as well-formed XML; no partial map is returned.
pub fn load_document(path: &Path) -> Result<VariableMap> {
    let text = fs::read_to_string(path)
        .map_err(|e| BufdiffError::malformed_document(path, e))?;
    parse_document(&text, path)
}

/// Parse a buffer document already held in memory.
///
/// `origin` is used only for error context.
pub fn parse_document(text: &str, origin: &Path) -> Result<VariableMap> {
    let doc = roxmltree::Document::parse(text)
        .map_err(|e| BufdiffError::malformed_document(origin, e))?;

    let mut variables = VariableMap::new();
    for node in doc.descendants().filter(|n| n.has_tag_name(VARIABLE_TAG)) {
        let path = trimmed_attribute(&node, PATH_ATTR);
        let value = trimmed_attribute(&node, INITIAL_VALUE_ATTR);
        if let (Some(path), Some(value)) = (path, value) {
            // Later declarations win when a path repeats
            variables.insert(path, value);
        }
    }

    Ok(variables)
}

/// Attribute lookup that trims surrounding whitespace and drops values that
/// trim to empty
fn trimmed_attribute(node: &roxmltree::Node, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
