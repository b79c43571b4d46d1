use crate::Attributes;
use alloc::collections::BTreeMap;
use core::fmt::{self, Display, Formatter};
use core::hash::BuildHasher;
use itertools::Itertools;
use std::collections::HashMap;

/// Attributes passed to [`element`](crate::element).
///
/// An empty list or map renders no attributes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeInput {
    /// Pre-formatted attribute text used verbatim.
    Raw(String),
    /// A single attribute.
    Single(String, String),
    /// A sequence of attributes.
    List(Vec<(String, String)>),
}

impl Display for AttributeInput {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(text) => write!(formatter, "{text}"),
            Self::Single(name, value) => write!(formatter, "{name}=\"{value}\""),
            // Multiple attributes are concatenated without separators.
            Self::List(entries) => write!(
                formatter,
                "{}",
                entries
                    .iter()
                    .format_with("", |(name, value), write| write(&format_args!(
                        "{name}=\"{value}\""
                    )))
            ),
        }
    }
}

impl From<&str> for AttributeInput {
    fn from(text: &str) -> Self {
        Self::Raw(text.into())
    }
}

impl From<String> for AttributeInput {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for AttributeInput {
    fn from((name, value): (N, V)) -> Self {
        Self::Single(name.into(), value.into())
    }
}

impl<N: Into<String>, V: Into<String>> From<Vec<(N, V)>> for AttributeInput {
    fn from(entries: Vec<(N, V)>) -> Self {
        Self::from_pairs(entries)
    }
}

impl<N: Into<String>, V: Into<String>, const M: usize> From<[(N, V); M]> for AttributeInput {
    fn from(entries: [(N, V); M]) -> Self {
        Self::from_pairs(entries)
    }
}

impl<N: Into<String>, V: Into<String>> From<BTreeMap<N, V>> for AttributeInput {
    fn from(map: BTreeMap<N, V>) -> Self {
        Self::from_pairs(map)
    }
}

impl<N: Into<String>, V: Into<String>, S: BuildHasher> From<HashMap<N, V, S>> for AttributeInput {
    fn from(map: HashMap<N, V, S>) -> Self {
        // Hash maps have no stable order.
        let mut entries = map
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect::<Vec<(String, String)>>();
        entries.sort();

        Self::List(entries)
    }
}

impl From<&Attributes> for AttributeInput {
    fn from(attributes: &Attributes) -> Self {
        Self::from_pairs(attributes.iter())
    }
}

impl From<Attributes> for AttributeInput {
    fn from(attributes: Attributes) -> Self {
        Self::from(&attributes)
    }
}

impl AttributeInput {
    fn from_pairs<N: Into<String>, V: Into<String>>(
        entries: impl IntoIterator<Item = (N, V)>,
    ) -> Self {
        Self::List(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
