//! Conversion from a JSON structure literal into the hierarchy model.
//!
//! Template structures are nested JSON objects: a key with a trailing `/`
//! or an object value is a directory, a string value is a file whose
//! non-empty string becomes its content, and anything else is an empty
//! file. `serde_json` is built with `preserve_order`, so key order carries
//! through to generation order.

use crate::error::{Error, Result};
use crate::model::Node;

/// Converts a JSON object into a hierarchy rooted at a directory named
/// `root_name`.
///
/// # Errors
/// * `Error::InvalidJsonFormat` if `structure` is not a JSON object
pub fn from_json(structure: &serde_json::Value, root_name: &str) -> Result<Node> {
    let Some(object) = structure.as_object() else {
        return Err(Error::InvalidJsonFormat {
            message: "template structure must be a JSON object".to_string(),
            detail: format!("got {}", json_type_name(structure)),
        });
    };

    let mut root = Node::directory(root_name);
    convert_object(object, &mut root);

    Ok(root)
}

fn convert_object(object: &serde_json::Map<String, serde_json::Value>, parent: &mut Node) {
    for (key, value) in object {
        let is_directory = key.ends_with('/') || value.is_object();
        let name = key.trim_end_matches('/');

        if name.is_empty() {
            continue;
        }

        if is_directory {
            let mut dir = Node::directory(name);
            if let Some(children) = value.as_object() {
                convert_object(children, &mut dir);
            }
            parent.add_child(dir);
        } else {
            let node = match value.as_str() {
                Some(content) if !content.is_empty() => Node::file_with_content(name, content),
                _ => Node::file(name),
            };
            parent.add_child(node);
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
