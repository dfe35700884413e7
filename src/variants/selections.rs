use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::VariantOption;

/// The option chosen per axis. An axis that is missing, or mapped to
/// `None`, resolves to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(IndexMap<String, Option<String>>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.set(axis, Some(option.into()));
        self
    }

    /// Selects a typed option on its own axis.
    pub fn variant<V: VariantOption>(self, option: V) -> Self {
        self.with(V::AXIS, option.option())
    }

    pub fn set(&mut self, axis: impl Into<String>, option: Option<String>) {
        self.0.insert(axis.into(), option);
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).and_then(|option| option.as_deref())
    }

    /// Every mentioned axis, including ones left unselected.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A, O> FromIterator<(A, O)> for Selections
where
    A: Into<String>,
    O: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, O)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(axis, option)| (axis.into(), Some(option.into())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unselected_axes_read_as_none() {
        let mut selections = Selections::new().with("variant", "secondary");
        selections.set("size", None);

        assert_eq!(selections.get("variant"), Some("secondary"));
        assert_eq!(selections.get("size"), None);
        assert_eq!(selections.axes().collect::<Vec<_>>(), ["variant", "size"]);
    }

    #[test]
    fn deserializes_from_a_map() {
        let selections: Selections =
            serde_json::from_str(r#"{ "variant": "outline", "size": null }"#).unwrap();

        assert_eq!(selections.get("variant"), Some("outline"));
        assert_eq!(selections.get("size"), None);
    }
}
