use crate::{Attributes, Element};
use serde::{Deserialize, Serialize};

/// Default content of an element.
pub const DEFAULT_CONTENT: &str = "div";

/// An HTML element.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HtmlElement {
    content: String,
    tag: String,
    attributes: Attributes,
}

impl HtmlElement {
    /// Creates an element.
    pub fn new(content: impl Into<String>, tag: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            content: content.into(),
            tag: tag.into(),
            attributes,
        }
    }
}

impl Default for HtmlElement {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT, "", Attributes::new())
    }
}

impl Element for HtmlElement {
    fn content(&self) -> &str {
        &self.content
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn with_content(&self, content: impl Into<String>) -> Self {
        let mut element = self.clone();
        element.content = content.into();
        element
    }

    fn with_tag(&self, tag: impl Into<String>) -> Self {
        let mut element = self.clone();
        element.tag = tag.into();
        element
    }

    fn with_attributes(&self, attributes: Attributes) -> Self {
        let mut element = self.clone();
        element.attributes = attributes;
        element
    }

    fn with_attribute(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = self.clone();
        element.attributes = element.attributes.set(name, value);
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementError;
    use pretty_assertions::assert_eq;

    fn paragraph() -> HtmlElement {
        HtmlElement::new("hello", "p", Attributes::from([("class", "note")]))
    }

    #[test]
    fn default() {
        let element = HtmlElement::default();

        assert_eq!(element.content(), "div");
        assert_eq!(element.tag(), "");
        assert!(element.attributes().is_empty());
    }

    #[test]
    fn accept_empty_tag() {
        assert_eq!(HtmlElement::new("", "", Attributes::new()).tag(), "");
    }

    #[test]
    fn get_attribute() {
        assert_eq!(paragraph().attribute("class"), Ok("note"));
    }

    #[test]
    fn fail_to_get_missing_attribute() {
        assert_eq!(
            paragraph().attribute("id"),
            Err(ElementError::AttributeNotFound("id".into()))
        );
    }

    #[test]
    fn with_content() {
        let original = paragraph();
        let element = original.with_content("bye");

        assert_eq!(element.content(), "bye");
        assert_eq!(element.tag(), original.tag());
        assert_eq!(element.attributes(), original.attributes());
        assert_eq!(original, paragraph());
    }

    #[test]
    fn with_tag() {
        let original = paragraph();
        let element = original.with_tag("span");

        assert_eq!(element.tag(), "span");
        assert_eq!(element.content(), original.content());
        assert_eq!(element.attributes(), original.attributes());
        assert_eq!(original.tag(), "p");
    }

    #[test]
    fn with_tag_twice() {
        let original = paragraph();

        assert_eq!(
            original.with_tag("em").with_tag("em"),
            original.with_tag("em")
        );
    }

    #[test]
    fn with_attributes() {
        let original = paragraph();
        let attributes = Attributes::from([("id", "foo"), ("title", "bar")]);
        let element = original.with_attributes(attributes.clone());

        assert_eq!(element.attributes(), &attributes);
        assert_eq!(
            element.attribute("class"),
            Err(ElementError::AttributeNotFound("class".into()))
        );
        assert_eq!(original.attribute("class"), Ok("note"));
    }

    #[test]
    fn with_attribute() {
        let original = paragraph();
        let element = original.with_attribute("id", "foo");

        assert_eq!(
            element.attributes().iter().collect::<Vec<_>>(),
            vec![("class", "note"), ("id", "foo")]
        );
        assert_eq!(original.attributes().len(), 1);
    }

    #[test]
    fn overwrite_attribute() {
        let element = paragraph().with_attribute("class", "warning");

        assert_eq!(element.attributes().len(), 1);
        assert_eq!(element.attribute("class"), Ok("warning"));
    }

    #[test]
    fn serialize() {
        assert_eq!(
            serde_json::to_string(&paragraph()).unwrap(),
            r#"{"content":"hello","tag":"p","attributes":{"class":"note"}}"#
        );
    }

    #[test]
    fn deserialize() {
        assert_eq!(
            serde_json::from_str::<HtmlElement>(
                r#"{"content":"hello","tag":"p","attributes":{"class":"note"}}"#
            )
            .unwrap(),
            paragraph()
        );
    }
}
