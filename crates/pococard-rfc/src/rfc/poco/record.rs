//! Contact record types (Portable Contacts schema).

/// Sub-field carrying the plain value of a complex attribute.
pub const VALUE: &str = "value";
/// Sub-field carrying the kind of a complex attribute (`work`, `home`, ...).
pub const TYPE: &str = "type";
/// Sub-field marking the preferred instance of a plural attribute.
pub const PRIMARY: &str = "primary";
/// Sub-field carrying the display form of a structured attribute.
pub const FORMATTED: &str = "formatted";

/// A contact, as an ordered list of named attributes.
///
/// Attribute order is preserved; setting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    attributes: Vec<(String, AttributeValue)>,
}

impl ContactRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, keeping the position of an existing one.
    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) {
        let name = name.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Builder form of [`ContactRecord::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the attribute with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, AttributeValue)> for ContactRecord {
    fn from_iter<I: IntoIterator<Item = (N, AttributeValue)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// Value of a top-level contact attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Scalar(String),
    Complex(Complex),
    /// Plural attribute whose instances are bare strings (e.g. `tags`).
    ScalarList(Vec<String>),
    /// Plural attribute whose instances are objects (e.g. `emails`).
    ComplexList(Vec<Complex>),
}

impl AttributeValue {
    #[must_use]
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    #[must_use]
    pub fn scalars<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::ScalarList(values.into_iter().map(Into::into).collect())
    }

    /// Returns whether this is a list with no instances.
    #[must_use]
    pub fn is_empty_list(&self) -> bool {
        match self {
            Self::ScalarList(items) => items.is_empty(),
            Self::ComplexList(items) => items.is_empty(),
            Self::Scalar(_) | Self::Complex(_) => false,
        }
    }
}

impl From<Complex> for AttributeValue {
    fn from(value: Complex) -> Self {
        Self::Complex(value)
    }
}

impl From<Vec<Complex>> for AttributeValue {
    fn from(value: Vec<Complex>) -> Self {
        Self::ComplexList(value)
    }
}

/// An object-valued attribute or list instance with named sub-fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Complex {
    fields: Vec<(String, SubField)>,
}

impl Complex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a sub-field, keeping the position of an existing one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SubField>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Builder form of [`Complex::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SubField>) -> Self {
        self.insert(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SubField> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Returns the sub-field as text when it is a scalar.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(SubField::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns whether the `primary` sub-field is truthy.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.get(PRIMARY).is_some_and(SubField::is_truthy)
    }
}

/// A sub-field of a [`Complex`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubField {
    Scalar(String),
    Complex(Complex),
}

impl SubField {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Complex(_) => None,
        }
    }

    /// Scalars are truthy unless empty, `false`, or `0`; objects always are.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Scalar(s) => {
                let s = s.trim();
                !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
            }
            Self::Complex(_) => true,
        }
    }
}

impl From<&str> for SubField {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for SubField {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for SubField {
    fn from(value: bool) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Complex> for SubField {
    fn from(value: Complex) -> Self {
        Self::Complex(value)
    }
}
