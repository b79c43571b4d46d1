use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// An element error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ElementError {
    /// An attribute is not found.
    AttributeNotFound(String),
}

impl Error for ElementError {}

impl Display for ElementError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeNotFound(name) => write!(formatter, "attribute not found: {name}"),
        }
    }
}
