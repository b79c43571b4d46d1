use crate::{Attributes, ElementError};

/// An HTML element.
///
/// Elements are immutable. `with_*` methods return modified copies and leave
/// the original untouched.
pub trait Element: Sized {
    /// Returns content.
    fn content(&self) -> &str;

    /// Returns a tag name.
    fn tag(&self) -> &str;

    /// Returns attributes.
    fn attributes(&self) -> &Attributes;

    /// Returns a value of an attribute.
    fn attribute(&self, name: &str) -> Result<&str, ElementError> {
        self.attributes()
            .get(name)
            .ok_or_else(|| ElementError::AttributeNotFound(name.into()))
    }

    /// Returns a copy with content replaced.
    fn with_content(&self, content: impl Into<String>) -> Self;

    /// Returns a copy with a tag name replaced.
    fn with_tag(&self, tag: impl Into<String>) -> Self;

    /// Returns a copy with all attributes replaced.
    fn with_attributes(&self, attributes: Attributes) -> Self;

    /// Returns a copy with an attribute added or overwritten.
    fn with_attribute(&self, name: impl Into<String>, value: impl Into<String>) -> Self;
}
