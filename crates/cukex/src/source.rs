//! Custom parameter-type definitions read from a JSON document.
//!
//! The expected document is an array of objects, each with string fields
//! `name` and `regexp`:
//!
//! ```json
//! [
//!     { "name": "color", "regexp": "red|blue|green|yellow" },
//!     { "name": "gender", "regexp": "male|female" }
//! ]
//! ```
//!
//! Loading never fails. A missing or unreadable file, invalid JSON, or a
//! document that is not an array all yield an empty list, and individual
//! entries lacking either field are dropped. The built-in parameter types stay
//! usable whatever the document contains.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A user-supplied parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTypeDefinition {
    /// Name used inside braces, e.g. `color` for `{color}`.
    pub name: String,
    /// Regular-expression fragment the placeholder expands to.
    pub regexp: String,
}

impl CustomTypeDefinition {
    /// Build a definition from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, regexp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regexp: regexp.into(),
        }
    }
}

/// Loose shape of a single entry; anything else is skipped.
#[derive(Deserialize)]
struct RawDefinition {
    name: Option<String>,
    regexp: Option<String>,
}

impl RawDefinition {
    fn into_definition(self) -> Option<CustomTypeDefinition> {
        match (self.name, self.regexp) {
            (Some(name), Some(regexp)) if !name.is_empty() && !regexp.is_empty() => {
                Some(CustomTypeDefinition { name, regexp })
            }
            _ => None,
        }
    }
}

/// Parse custom definitions from JSON text.
///
/// # Examples
/// ```
/// use cukex::parse_custom_definitions;
/// let defs = parse_custom_definitions(r#"[{"name": "color", "regexp": "red|blue"}, {"name": "x"}]"#);
/// assert_eq!(defs.len(), 1);
/// assert_eq!(defs[0].name, "color");
/// assert!(parse_custom_definitions("not json").is_empty());
/// ```
#[must_use]
pub fn parse_custom_definitions(json: &str) -> Vec<CustomTypeDefinition> {
    let entries = match serde_json::from_str::<Value>(json) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            warn!(
                found = json_kind(&other),
                "custom parameter types must be a JSON array; ignoring document"
            );
            return Vec::new();
        }
        Err(err) => {
            warn!(error = %err, "custom parameter types are not valid JSON; ignoring document");
            return Vec::new();
        }
    };

    let total = entries.len();
    let definitions: Vec<_> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<RawDefinition>(entry).ok())
        .filter_map(RawDefinition::into_definition)
        .collect();
    if definitions.len() < total {
        debug!(
            skipped = total - definitions.len(),
            "skipped custom parameter types without a name or regexp"
        );
    }
    definitions
}

/// Read and parse custom definitions from `path`.
///
/// A missing file is the normal case and is logged at `debug`; other read
/// failures are logged at `warn`. Both yield an empty list.
#[must_use]
pub fn load_custom_definitions(path: &Path) -> Vec<CustomTypeDefinition> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let definitions = parse_custom_definitions(&contents);
            debug!(
                path = %path.display(),
                count = definitions.len(),
                "loaded custom parameter types"
            );
            definitions
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no custom parameter types file");
            Vec::new()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot read custom parameter types");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
