use serde::{Deserialize, Serialize};

/// The marker the host writes in place of a value that differs across
/// sub-ranges of a node (e.g. a text node with two font sizes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixedMarker {
    #[serde(rename = "MIXED")]
    Mixed,
}

/// A property that is either a single uniform value or the mixed sentinel.
///
/// The JSON form is either the plain value or the string `"MIXED"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mixable<T> {
    /// Not uniform across the node; must not be read as a single scalar.
    Mixed(MixedMarker),
    /// One value for the whole node.
    Uniform(T),
}

impl<T> Mixable<T> {
    /// Returns the value when uniform, `None` when mixed.
    pub fn uniform(&self) -> Option<&T> {
        match self {
            Mixable::Uniform(value) => Some(value),
            Mixable::Mixed(_) => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, Mixable::Mixed(_))
    }
}

impl<T> From<T> for Mixable<T> {
    fn from(value: T) -> Self {
        Mixable::Uniform(value)
    }
}

/// Reads through an optional mixable property, treating `Mixed` as absent.
pub(crate) fn uniform<T>(value: &Option<Mixable<T>>) -> Option<&T> {
    value.as_ref().and_then(Mixable::uniform)
}
