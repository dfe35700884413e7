//! Conflict-aware class merging.
//!
//! Every class is classified into a [`UtilityGroup`] by a static table.
//! Walking the inputs in order, a class replaces any earlier class with the
//! same modifiers and group, so overrides always beat the base and later
//! overrides beat earlier ones.

mod groups;
pub use groups::*;

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::utils::ClassList;

/// The merged classes of one element.
///
/// Equality ignores order. Iteration follows the order in which each
/// surviving class was last written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassSet(IndexSet<String>);

impl ClassSet {
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The value of the element's `class` attribute.
    pub fn class_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ClassSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<indexmap::set::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(String::as_str as fn(&String) -> &str)
    }
}

impl From<ClassSet> for ClassList {
    fn from(set: ClassSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassSet {
    /// Collects classes as-is, without resolving conflicts.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|class| class.as_ref().to_owned()).collect())
    }
}

/// Merges `overrides` over `base`, keeping one class per utility group.
///
/// ```
/// use tesserae_styles::{merge::merge, utils::ClassList};
///
/// let base = ClassList::parse("px-2 py-1 bg-primary text-sm");
/// let overrides = ClassList::parse("p-4 bg-destructive");
///
/// assert_eq!(merge(&base, &overrides).class_name(), "text-sm p-4 bg-destructive");
/// ```
pub fn merge<'a>(
    base: impl IntoIterator<Item = &'a str>,
    overrides: impl IntoIterator<Item = &'a str>,
) -> ClassSet {
    let mut kept: IndexMap<ClassKey, &str> = IndexMap::new();

    for class in base.into_iter().chain(overrides) {
        let key = parse_class(class).key();

        if let Some(group) = key.group() {
            for conflict in group.conflicts() {
                kept.shift_remove(&key.with_group(*conflict));
            }
        }

        kept.shift_remove(&key);
        kept.insert(key, class);
    }

    kept.into_values().collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn merged(base: &str, overrides: &str) -> ClassSet {
        merge(&ClassList::parse(base), &ClassList::parse(overrides))
    }

    fn set(classes: &str) -> ClassSet {
        classes.split_whitespace().collect()
    }

    #[test]
    fn later_class_of_the_same_group_wins() {
        assert_eq!(
            merged("bg-primary text-primary-foreground", "bg-secondary"),
            set("text-primary-foreground bg-secondary")
        );
    }

    #[test]
    fn declaration_override_replaces_border_color() {
        let result = merged("border border-transparent bg-destructive", "border-color:red");

        assert!(result.contains("border-color:red"));
        assert!(!result.contains("border-transparent"));
        assert!(result.contains("border"));
    }

    #[test]
    fn modifiers_partition_groups() {
        assert_eq!(
            merged("bg-primary hover:bg-primary-hover", "bg-secondary"),
            set("hover:bg-primary-hover bg-secondary")
        );
        assert_eq!(
            merged("dark:bg-card", "hover:dark:bg-muted dark:hover:bg-accent"),
            set("dark:bg-card dark:hover:bg-accent")
        );
    }

    #[test]
    fn shorthand_removes_its_longhands() {
        assert_eq!(merged("px-2 py-1 pt-3", "p-4"), set("p-4"));
        assert_eq!(merged("mx-auto", "m-0"), set("m-0"));
        assert_eq!(merged("border-x-2", "border"), set("border"));
        assert_eq!(merged("inset-x-0 top-2", "inset-4"), set("inset-4"));
    }

    #[test]
    fn longhand_after_shorthand_is_kept() {
        assert_eq!(merged("p-4", "px-2"), set("p-4 px-2"));
    }

    #[test]
    fn unknown_classes_only_collapse_with_themselves() {
        assert_eq!(
            merged("prose animate-spin", "prose prose-lg"),
            set("animate-spin prose prose-lg")
        );
    }

    #[test]
    fn width_and_color_of_one_property_coexist() {
        assert_eq!(
            merged("border-2 border-input ring-2", "ring-ring"),
            set("border-2 border-input ring-2 ring-ring")
        );
    }

    #[test]
    fn side_widths_leave_the_border_color_alone() {
        assert_eq!(
            merged("border border-input", "border-t"),
            set("border border-input border-t")
        );
        assert_eq!(
            merged("border-t border-b-2 border-input", "border-2"),
            set("border-input border-2")
        );
        assert_eq!(merged("border-l-4 border-t", "border-x"), set("border-t border-x"));
    }

    #[test]
    fn background_keywords_leave_the_background_color_alone() {
        assert_eq!(
            merged("bg-card bg-center", "bg-cover bg-no-repeat"),
            set("bg-card bg-center bg-cover bg-no-repeat")
        );
        assert_eq!(
            merged("ring-2 ring-ring", "ring-inset"),
            set("ring-2 ring-ring ring-inset")
        );
    }

    #[test]
    fn order_follows_last_write() {
        let result = merged("inline-flex bg-primary rounded-md", "bg-secondary");
        assert_eq!(result.class_name(), "inline-flex rounded-md bg-secondary");
    }

    #[test]
    fn empty_inputs() {
        assert!(merged("", "").is_empty());
        assert_eq!(merged("", "px-2"), set("px-2"));
    }

    fn arb_class() -> impl Strategy<Value = String> {
        prop_oneof![
            "(bg|text|border|ring)-(primary|secondary|muted|card)",
            "(p|px|py|m|mx|my)-[0-4]",
            "(hover:|dark:)?(bg|text)-(accent|destructive)",
            "(block|flex|hidden|rounded|rounded-md|border|border-2)",
            "(prose|animate-spin|group|peer)",
        ]
    }

    fn arb_classes() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(arb_class(), 0..12)
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(base in arb_classes(), overrides in arb_classes()) {
            let once = merge(base.iter().map(String::as_str), overrides.iter().map(String::as_str));
            let twice = merge(&once, overrides.iter().map(String::as_str));

            prop_assert_eq!(twice, once);
        }

        #[test]
        fn last_class_of_a_group_survives(base in arb_classes(), overrides in arb_classes()) {
            let all: Vec<&str> = base.iter().chain(&overrides).map(String::as_str).collect();
            let result = merge(base.iter().map(String::as_str), overrides.iter().map(String::as_str));

            for earlier in &all {
                let key = parse_class(earlier).key();
                let winner = all.iter().rev().find(|later| parse_class(later).key() == key);

                if winner != Some(earlier) {
                    prop_assert!(!result.contains(earlier), "{} should be replaced", earlier);
                }
            }

            if let Some(last) = all.last() {
                prop_assert!(result.contains(last));
            }
        }
    }
}
