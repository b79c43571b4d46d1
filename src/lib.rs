#![doc = include_str!("../README.md")]

extern crate alloc;

mod attribute_input;
mod attributes;
mod element;
mod error;
mod factory;
mod html_element;
mod render;

pub use self::{
    attribute_input::AttributeInput,
    attributes::Attributes,
    element::Element,
    error::ElementError,
    factory::{ElementFactory, HtmlElementFactory},
    html_element::{DEFAULT_CONTENT, HtmlElement},
    render::{
        DEFAULT_LANG, DEFAULT_TAG, DOCTYPE, RenderOptions, element, page, render_element, start,
        tag_body, tag_head, tag_html, tag_title,
    },
};
