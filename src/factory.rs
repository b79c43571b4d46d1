use crate::{Attributes, Element, HtmlElement};
use log::trace;

/// An element factory.
pub trait ElementFactory {
    /// An element type.
    type Element: Element;

    /// Creates an element.
    fn create_element(
        &self,
        content: impl Into<String>,
        tag: impl Into<String>,
        attributes: Attributes,
    ) -> Self::Element;
}

/// A factory of [`HtmlElement`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlElementFactory {}

impl HtmlElementFactory {
    /// Creates a factory.
    pub const fn new() -> Self {
        Self {}
    }
}

impl ElementFactory for HtmlElementFactory {
    type Element = HtmlElement;

    fn create_element(
        &self,
        content: impl Into<String>,
        tag: impl Into<String>,
        attributes: Attributes,
    ) -> HtmlElement {
        let element = HtmlElement::new(content, tag, attributes);
        trace!("created <{}> element", element.tag());
        element
    }
}
