use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// An ordered sequence of class names.
///
/// Order only matters for readability. Conflicts between classes are
/// decided by utility group when merging, not by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClassList(SmallVec<[String; 8]>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a space separated class string, e.g. `"inline-flex px-4"`.
    pub fn parse(classes: &str) -> Self {
        Self(classes.split_whitespace().map(str::to_owned).collect())
    }

    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        self.0.extend(class.split_whitespace().map(str::to_owned));
    }

    pub fn extend_from(&mut self, other: &ClassList) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.iter().any(|c| c == class)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassList {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for ClassList {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl<const N: usize> From<[&str; N]> for ClassList {
    fn from(value: [&str; N]) -> Self {
        value.into_iter().collect()
    }
}

impl From<Vec<String>> for ClassList {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = Self::new();
        for class in iter {
            list.push(class.as_ref());
        }
        list
    }
}

impl<'a> IntoIterator for &'a ClassList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(String::as_str as fn(&String) -> &str)
    }
}

impl<'de> Deserialize<'de> for ClassList {
    /// Accepts a class string or a list of class strings.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrVec {
            One(String),
            Many(Vec<String>),
        }

        Ok(match StringOrVec::deserialize(deserializer)? {
            StringOrVec::One(classes) => Self::parse(&classes),
            StringOrVec::Many(classes) => classes.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_whitespace() {
        let list = ClassList::parse("  inline-flex\trounded-full \n px-4 ");
        assert_eq!(list.iter().collect::<Vec<_>>(), ["inline-flex", "rounded-full", "px-4"]);
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let list = ClassList::from(["px-4", "py-1", "px-4"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_string(), "px-4 py-1 px-4");
    }

    #[test]
    fn push_splits_multi_class_strings() {
        let mut list = ClassList::new();
        list.push("border border-border");
        assert_eq!(list.len(), 2);
        assert!(list.contains("border-border"));
    }

    #[test]
    fn deserializes_string_or_list() {
        let one: ClassList = serde_json::from_str(r#""bg-card text-foreground""#).unwrap();
        let many: ClassList = serde_json::from_str(r#"["bg-card", "text-foreground"]"#).unwrap();
        assert_eq!(one, many);
    }
}
