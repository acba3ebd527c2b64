//! Node attributes and link targets.

/// Identifier, classes and key-value pairs attached to a node.
///
/// Encoded as `[identifier, [class], [[key, value]]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attr {
    /// Element identifier (used as a cross-reference label)
    pub identifier: String,

    /// Class names, in source order
    pub classes: Vec<String>,

    /// Key-value pairs, in source order
    pub attributes: Vec<(String, String)>,
}

array_encoded!(Attr {
    identifier: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
});

impl Attr {
    /// Create attributes with the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Add a class and return self.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a key-value pair and return self.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// First class name, if any.
    pub fn first_class(&self) -> Option<&str> {
        self.classes.first().map(String::as_str)
    }

    /// Value of the first pair with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether all three components are empty.
    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty() && self.classes.is_empty() && self.attributes.is_empty()
    }
}

/// Link or image target, encoded as `[url, title]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    /// Destination URL
    pub url: String,

    /// Title text
    pub title: String,
}

array_encoded!(Target {
    url: String,
    title: String,
});
