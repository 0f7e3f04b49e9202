//! Parameter-type registry mapping `{name}` placeholders to regex fragments.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::config::RegistryConfig;
use crate::source::CustomTypeDefinition;

const INTEGER: &str = r"-?\d+";
const DECIMAL: &str = r"(?=.*\d.*)[-+]?\d*(?:\.(?=\d.*))?\d*(?:\d+[E][+-]?\d+)?";
const WORD: &str = r"[^\s]+";
const STRING: &str = r#""([^"\\]*(\\.[^"\\]*)*)"|'([^'\\]*(\\.[^'\\]*)*)'"#;
const ANONYMOUS: &str = ".*";

/// Built-in parameter types, available in every registry.
pub const BUILTIN_PARAMETER_TYPES: [(&str, &str); 11] = [
    ("int", INTEGER),
    ("float", DECIMAL),
    ("word", WORD),
    ("string", STRING),
    ("bigdecimal", DECIMAL),
    ("double", DECIMAL),
    ("biginteger", INTEGER),
    ("byte", INTEGER),
    ("short", INTEGER),
    ("long", INTEGER),
    ("", ANONYMOUS),
];

/// Resolves parameter-type names to regular-expression fragments.
///
/// The registry always holds the built-in types; custom definitions may add
/// new names or replace built-in fragments. Lookups are exact and
/// case-sensitive, and the empty name is the anonymous `{}` type.
///
/// # Examples
/// ```
/// use cukex::{CustomTypeDefinition, ParameterTypeRegistry};
/// let registry = ParameterTypeRegistry::with_custom_types([
///     CustomTypeDefinition::new("color", "red|blue"),
/// ]);
/// assert_eq!(registry.lookup("color"), Some("red|blue"));
/// assert_eq!(registry.lookup("int"), Some(r"-?\d+"));
/// assert_eq!(registry.lookup("Int"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTypeRegistry {
    types: HashMap<String, String>,
}

impl Default for ParameterTypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ParameterTypeRegistry {
    /// Create a registry holding only the built-in parameter types.
    #[must_use]
    pub fn builtin() -> Self {
        let types = BUILTIN_PARAMETER_TYPES
            .iter()
            .map(|(name, fragment)| ((*name).to_string(), (*fragment).to_string()))
            .collect();
        Self { types }
    }

    /// Create a registry with the built-ins plus `definitions`.
    #[must_use]
    pub fn with_custom_types<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = CustomTypeDefinition>,
    {
        let mut registry = Self::builtin();
        registry.merge(definitions);
        registry
    }

    /// Insert or overwrite each usable definition.
    ///
    /// Definitions with an empty name or an empty regexp are skipped. Returns
    /// how many definitions were applied.
    pub fn merge<I>(&mut self, definitions: I) -> usize
    where
        I: IntoIterator<Item = CustomTypeDefinition>,
    {
        let mut applied = 0usize;
        for CustomTypeDefinition { name, regexp } in definitions {
            if name.is_empty() || regexp.is_empty() {
                debug!(name = %name, "skipping incomplete custom parameter type");
                continue;
            }
            if let Some(previous) = self.types.insert(name.clone(), regexp) {
                debug!(name = %name, previous = %previous, "custom parameter type overrides existing fragment");
            }
            applied += 1;
        }
        applied
    }

    /// Look up the fragment registered for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(String::as_str)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered parameter types, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always `false` in practice, since the built-ins cannot be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over `(name, fragment)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types
            .iter()
            .map(|(name, fragment)| (name.as_str(), fragment.as_str()))
    }
}

static DEFAULT_REGISTRY: LazyLock<ParameterTypeRegistry> =
    LazyLock::new(|| RegistryConfig::from_env().load_registry());

/// The process-wide registry used by [`crate::transform`] and
/// [`crate::compile`].
///
/// It is built on first use from [`RegistryConfig::from_env`] and never
/// reloaded: definitions written to disk afterwards are not seen by this
/// process. Build a [`ParameterTypeRegistry`] explicitly when that matters.
#[must_use]
pub fn default_registry() -> &'static ParameterTypeRegistry {
    &DEFAULT_REGISTRY
}
