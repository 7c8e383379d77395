//! Attribute source seam: ordered access to namespaced attribute triples.

/// Namespace URI the standard theme attributes are declared under.
pub const THEME_NAMESPACE: &str = "http://www.w3.org/2001/pluto.html";

/// One namespaced attribute as produced by a markup tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Namespace URI, empty for un-namespaced attributes
    pub namespace: String,
    /// Local attribute name
    pub name: String,
    /// Raw attribute text, unresolved
    pub value: String,
}

impl Attribute {
    /// Creates an attribute triple.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered, indexable view of the attributes on one markup tag.
///
/// Indices passed to the accessors are always in `0..len()`; the parser
/// never indexes past the count it is given.
pub trait AttributeSource {
    /// Number of attributes on the tag.
    fn len(&self) -> usize;

    /// Whether the tag carries no attributes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Namespace URI of the attribute at `index`.
    fn namespace(&self, index: usize) -> &str;

    /// Local name of the attribute at `index`.
    fn name(&self, index: usize) -> &str;

    /// Raw unresolved text of the attribute at `index`.
    fn raw_value(&self, index: usize) -> &str;
}

impl AttributeSource for [Attribute] {
    fn len(&self) -> usize {
        <[Attribute]>::len(self)
    }

    fn namespace(&self, index: usize) -> &str {
        &self[index].namespace
    }

    fn name(&self, index: usize) -> &str {
        &self[index].name
    }

    fn raw_value(&self, index: usize) -> &str {
        &self[index].value
    }
}

/// Exact-match namespace predicate.
///
/// Attributes whose namespace does not equal the held URI are ignored by
/// the parser regardless of their name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceFilter {
    uri: String,
}

impl NamespaceFilter {
    /// Creates a filter accepting exactly `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Whether `namespace` equals the accepted URI.
    pub fn matches(&self, namespace: &str) -> bool {
        self.uri == namespace
    }

    /// The accepted namespace URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}
