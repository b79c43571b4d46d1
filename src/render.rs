mod options;

pub use self::options::RenderOptions;
use crate::{AttributeInput, Element};
use log::trace;

/// A document type declaration.
pub const DOCTYPE: &str = "<!DOCTYPE html>";
/// A default document language.
pub const DEFAULT_LANG: &str = "en";
/// A default tag name of elements.
pub const DEFAULT_TAG: &str = "div";

/// Returns a document type declaration.
pub const fn start() -> &'static str {
    DOCTYPE
}

/// Renders an `html` tag.
pub fn tag_html(content: &str, lang: &str) -> String {
    format!(r#"<html lang="{lang}">{content}</html>"#)
}

/// Renders a `head` tag.
pub fn tag_head(content: &str) -> String {
    format!("<head>{content}</head>")
}

/// Renders a `body` tag.
pub fn tag_body(content: &str) -> String {
    format!("<body>{content}</body>")
}

/// Renders a `title` tag.
pub fn tag_title(content: &str) -> String {
    format!("<title>{content}</title>")
}

/// Renders an element.
///
/// Neither content nor attributes are escaped. An attribute value containing
/// `"` breaks the markup.
pub fn element(tag: &str, content: &str, attributes: impl Into<AttributeInput>) -> String {
    let attributes = attributes.into();

    trace!("rendering <{tag}> element with attributes {attributes:?}");

    format!("<{tag} {attributes}>{content}</{tag}>")
}

/// Renders an element value.
pub fn render_element(value: &impl Element) -> String {
    element(value.tag(), value.content(), value.attributes())
}

/// Renders a whole document.
pub fn page(options: &RenderOptions, head: &str, body: &str) -> String {
    let head = if let Some(title) = options.title() {
        tag_title(title) + head
    } else {
        head.into()
    };

    trace!("rendering page in {}", options.lang());

    format!(
        "{}{}",
        start(),
        tag_html(&(tag_head(&head) + &tag_body(body)), options.lang())
    )
}
