use crate::{error::StyleError, utils::ClassList};

use super::{Selections, Variants};

/// Resolves `selections` against `variants`.
///
/// The base classes come first, followed by the classes of the picked
/// option of every axis in declaration order. Unselected axes use their
/// default. Selecting an option an axis doesn't have, or naming an axis
/// the component doesn't declare, is an error; nothing is silently
/// defaulted.
pub fn resolve(variants: &Variants, selections: &Selections) -> Result<ClassList, StyleError> {
    if let Some(axis) = selections.axes().find(|axis| variants.axis(axis).is_none()) {
        return Err(StyleError::UnknownVariantAxis {
            axis: axis.to_owned(),
        });
    }

    let mut classes = variants.base().clone();

    for spec in variants.axes() {
        let (option, option_classes) = spec.pick(selections.get(spec.axis()))?;
        tracing::trace!(axis = spec.axis(), option, "resolved variant axis");

        classes.extend_from(option_classes);
    }

    Ok(classes)
}

impl Variants {
    pub fn resolve(&self, selections: &Selections) -> Result<ClassList, StyleError> {
        resolve(self, selections)
    }

    /// The classes of every axis at its default.
    pub fn defaults(&self) -> Selections {
        self.axes()
            .iter()
            .map(|spec| (spec.axis(), spec.default_option()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::variants::VariantSpec;

    fn button() -> Variants {
        Variants::new("inline-flex items-center")
            .with_axis(
                VariantSpec::new(
                    "variant",
                    [
                        ("default", "bg-primary text-primary-foreground"),
                        ("outline", "border border-input bg-background"),
                    ],
                    "default",
                )
                .unwrap(),
            )
            .unwrap()
            .with_axis(
                VariantSpec::new("size", [("sm", "h-8 px-3"), ("lg", "h-10 px-8")], "sm").unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn base_then_axes_in_declaration_order() {
        let selections = Selections::new().with("size", "lg").with("variant", "outline");

        assert_eq!(
            resolve(&button(), &selections).unwrap().to_string(),
            "inline-flex items-center border border-input bg-background h-10 px-8"
        );
    }

    #[test]
    fn missing_selections_use_defaults() {
        assert_eq!(
            button().resolve(&Selections::new()).unwrap().to_string(),
            "inline-flex items-center bg-primary text-primary-foreground h-8 px-3"
        );
    }

    #[test]
    fn axis_with_only_a_default_still_applies() {
        let variants = Variants::new(ClassList::new())
            .with_axis(VariantSpec::new("tone", [("plain", "text-foreground")], "plain").unwrap())
            .unwrap();

        assert_eq!(
            variants.resolve(&Selections::new()).unwrap().to_string(),
            "text-foreground"
        );
    }

    #[test]
    fn no_axes_yields_base() {
        let variants = Variants::new("block");
        assert_eq!(variants.resolve(&Selections::new()).unwrap().to_string(), "block");
    }

    #[test]
    fn invalid_option_is_an_error() {
        let err = button()
            .resolve(&Selections::new().with("variant", "primary"))
            .unwrap_err();

        assert!(matches!(
            err,
            StyleError::InvalidVariantOption { ref option, .. } if option == "primary"
        ));
    }

    #[test]
    fn unknown_axis_is_an_error() {
        let err = button()
            .resolve(&Selections::new().with("tone", "loud"))
            .unwrap_err();

        assert_eq!(
            err,
            StyleError::UnknownVariantAxis {
                axis: "tone".into()
            }
        );
    }

    proptest! {
        #[test]
        fn defaulting_is_deterministic(
            variant in proptest::option::of(prop_oneof![Just("default"), Just("outline")]),
            size in proptest::option::of(prop_oneof![Just("sm"), Just("lg")]),
        ) {
            let variants = button();

            let mut partial = Selections::new();
            partial.set("variant", variant.map(str::to_owned));
            partial.set("size", size.map(str::to_owned));

            let explicit = Selections::new()
                .with("variant", variant.unwrap_or("default"))
                .with("size", size.unwrap_or("sm"));

            prop_assert_eq!(
                variants.resolve(&partial).unwrap(),
                variants.resolve(&explicit).unwrap()
            );
            prop_assert_eq!(
                variants.resolve(&Selections::new()).unwrap(),
                variants.resolve(&variants.defaults()).unwrap()
            );
        }
    }
}
