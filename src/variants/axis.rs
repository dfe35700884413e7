use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tesserae_theme::TokenTable;

use crate::{
    error::StyleError,
    theme::{TokenReference, token_reference},
    utils::ClassList,
};

/// One variant axis: its options, each with the classes it applies, and
/// the option used when nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVariantSpec")]
pub struct VariantSpec {
    axis: String,
    options: IndexMap<String, ClassList>,
    default: String,
}

#[derive(Deserialize)]
struct RawVariantSpec {
    axis: String,
    options: IndexMap<String, ClassList>,
    default: String,
}

impl TryFrom<RawVariantSpec> for VariantSpec {
    type Error = StyleError;

    fn try_from(raw: RawVariantSpec) -> Result<Self, Self::Error> {
        VariantSpec::new(raw.axis, raw.options, raw.default)
    }
}

impl VariantSpec {
    /// Fails with [`StyleError::InvalidDefaultOption`] if `default` isn't
    /// one of `options`.
    pub fn new<O, C>(
        axis: impl Into<String>,
        options: impl IntoIterator<Item = (O, C)>,
        default: impl Into<String>,
    ) -> Result<Self, StyleError>
    where
        O: Into<String>,
        C: Into<ClassList>,
    {
        let axis = axis.into();
        let default = default.into();
        let options: IndexMap<String, ClassList> = options
            .into_iter()
            .map(|(option, classes)| (option.into(), classes.into()))
            .collect();

        if !options.contains_key(&default) {
            return Err(StyleError::InvalidDefaultOption { axis, default });
        }

        Ok(Self {
            axis,
            options,
            default,
        })
    }

    pub fn axis(&self) -> &str {
        &self.axis
    }

    pub fn default_option(&self) -> &str {
        &self.default
    }

    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn classes(&self, option: &str) -> Option<&ClassList> {
        self.options.get(option)
    }

    /// The option to apply for `selection`, falling back to the default.
    pub fn pick<'a>(
        &'a self,
        selection: Option<&str>,
    ) -> Result<(&'a str, &'a ClassList), StyleError> {
        let option = selection.unwrap_or(&self.default);

        self.options
            .get_key_value(option)
            .map(|(option, classes)| (option.as_str(), classes))
            .ok_or_else(|| StyleError::InvalidVariantOption {
                axis: self.axis.clone(),
                option: option.to_owned(),
                allowed: self.options.keys().cloned().collect(),
            })
    }
}

/// Everything a component declares about its style: classes applied
/// regardless of selection, followed by independent variant axes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVariants")]
pub struct Variants {
    base: ClassList,
    axes: Vec<VariantSpec>,
}

#[derive(Deserialize)]
struct RawVariants {
    #[serde(default)]
    base: ClassList,
    #[serde(default)]
    axes: Vec<VariantSpec>,
}

impl TryFrom<RawVariants> for Variants {
    type Error = StyleError;

    fn try_from(raw: RawVariants) -> Result<Self, Self::Error> {
        raw.axes
            .into_iter()
            .try_fold(Variants::new(raw.base), Variants::with_axis)
    }
}

impl Variants {
    pub fn new(base: impl Into<ClassList>) -> Self {
        Self {
            base: base.into(),
            axes: Vec::new(),
        }
    }

    /// Adds an axis after the ones already declared.
    pub fn with_axis(mut self, spec: VariantSpec) -> Result<Self, StyleError> {
        if self.axis(spec.axis()).is_some() {
            return Err(StyleError::DuplicateVariantAxis { axis: spec.axis });
        }

        self.axes.push(spec);
        Ok(self)
    }

    pub fn base(&self) -> &ClassList {
        &self.base
    }

    /// The declared axes, in declaration order.
    pub fn axes(&self) -> &[VariantSpec] {
        &self.axes
    }

    pub fn axis(&self, name: &str) -> Option<&VariantSpec> {
        self.axes.iter().find(|spec| spec.axis == name)
    }

    /// Every token used by the base or by any option of any axis.
    pub fn token_references(&self) -> impl Iterator<Item = TokenReference<'_>> {
        std::iter::once(&self.base)
            .chain(self.axes.iter().flat_map(|spec| spec.options.values()))
            .flat_map(|classes| classes.iter())
            .filter_map(token_reference)
    }

    /// Checks that every referenced token is registered in `table`.
    pub fn validate_tokens(&self, table: &TokenTable) -> Result<(), StyleError> {
        match self
            .token_references()
            .find(|reference| !table.contains(reference.token()))
        {
            Some(reference) => Err(StyleError::unknown_token(reference.token())),
            None => Ok(()),
        }
    }
}
