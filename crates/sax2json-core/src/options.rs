//! Converter configuration.

use serde::{Deserialize, Serialize};

/// Key used for an element's own text when it also has attributes or children.
pub const DEFAULT_VALUE_KEY: &str = "text";

/// Prefix prepended to attribute-derived keys when prefixing is enabled.
pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "@";

/// Options supplied once when a [`TreeBuilder`](crate::TreeBuilder) is created.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use sax2json_core::ConvertOptions;
/// let options: ConvertOptions =
///     serde_json::from_str(r#"{"attribute_prefix_enabled": true}"#).unwrap();
/// assert_eq!(options.attribute_key("id"), "@id");
/// assert!(options.primitives);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Run literal type inference on text and attribute values. When false,
    /// every leaf is a string.
    pub primitives: bool,
    /// Key holding an element's trimmed text next to its attributes.
    pub value_key: String,
    /// Prepend `attribute_prefix` to attribute-derived keys.
    pub attribute_prefix_enabled: bool,
    pub attribute_prefix: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            primitives: true,
            value_key: DEFAULT_VALUE_KEY.to_string(),
            attribute_prefix_enabled: false,
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn with_primitives(mut self, primitives: bool) -> Self {
        self.primitives = primitives;
        self
    }

    pub fn with_value_key(mut self, value_key: impl Into<String>) -> Self {
        self.value_key = value_key.into();
        self
    }

    /// Enable attribute prefixing with the given prefix.
    pub fn with_attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attribute_prefix_enabled = true;
        self.attribute_prefix = prefix.into();
        self
    }

    pub fn with_attribute_prefix_enabled(mut self, enabled: bool) -> Self {
        self.attribute_prefix_enabled = enabled;
        self
    }

    /// The object key an attribute named `name` is stored under.
    pub fn attribute_key(&self, name: &str) -> String {
        if self.attribute_prefix_enabled {
            format!("{}{}", self.attribute_prefix, name)
        } else {
            name.to_string()
        }
    }
}
