use std::fmt::Write;

use indexmap::IndexMap;
use tesserae_theme::{TokenTable, custom_property};

use crate::{
    error::StyleError,
    merge::{ClassSet, merge},
    theme::{ThemeModeSource, token_reference},
    utils::ClassList,
    variants::{Selections, VariantOption, Variants},
};

/// What a caller passes when instantiating a styled element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    pub variant_selections: Selections,
    pub extra_classes: ClassList,
    pub attributes: IndexMap<String, String>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.variant_selections = self.variant_selections.with(axis, option);
        self
    }

    pub fn variant<V: VariantOption>(mut self, option: V) -> Self {
        self.variant_selections = self.variant_selections.variant(option);
        self
    }

    /// Extra classes merged over the resolved ones, e.g. `"px-2 bg-card"`.
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        self.extra_classes.push(classes);
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// The attribute set of a rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    pub tag: &'static str,
    pub classes: ClassSet,
    /// Custom properties the classes read, resolved for one theme mode.
    pub style_vars: Option<IndexMap<String, String>>,
    pub attributes: IndexMap<String, String>,
}

impl RenderedElement {
    pub fn class_name(&self) -> String {
        self.classes.class_name()
    }

    /// The `style` attribute declaring [`Self::style_vars`].
    pub fn style_attribute(&self) -> Option<String> {
        let vars = self.style_vars.as_ref()?;

        Some(
            vars.iter()
                .map(|(property, value)| format!("{property}: {value};"))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// The element's opening tag with every attribute, values escaped.
    pub fn to_html_open_tag(&self) -> String {
        let mut html = format!("<{}", self.tag);

        if !self.classes.is_empty() {
            let _ = write!(html, " class=\"{}\"", escape(&self.class_name()));
        }

        if let Some(style) = self.style_attribute() {
            let _ = write!(html, " style=\"{}\"", escape(&style));
        }

        for (name, value) in &self.attributes {
            let _ = write!(html, " {name}=\"{}\"", escape(value));
        }

        html.push('>');
        html
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Resolves `props` against `variants`, merges the extra classes over the
/// result and attaches the passthrough attributes.
pub fn render(
    tag: &'static str,
    variants: &Variants,
    props: &Props,
) -> Result<RenderedElement, StyleError> {
    let resolved = variants.resolve(&props.variant_selections)?;
    let classes = merge(&resolved, &props.extra_classes);

    tracing::trace!(tag, classes = %classes, "rendered element");

    Ok(RenderedElement {
        tag,
        classes,
        style_vars: None,
        attributes: props.attributes.clone(),
    })
}

/// Like [`render`], and also resolves every custom property the final
/// classes read under the mode given by `mode`.
pub fn render_themed(
    tag: &'static str,
    variants: &Variants,
    props: &Props,
    table: &TokenTable,
    mode: impl ThemeModeSource,
) -> Result<RenderedElement, StyleError> {
    let mut element = render(tag, variants, props)?;
    let mode = mode.theme_mode();

    let mut vars = IndexMap::new();
    for reference in element.classes.iter().filter_map(token_reference) {
        let token = reference.token();

        if vars.contains_key(token) {
            continue;
        }

        vars.insert(token, table.resolve(token, mode)?.to_string());
    }

    element.style_vars = Some(
        vars.into_iter()
            .map(|(token, value)| (custom_property(token), value))
            .collect(),
    );

    Ok(element)
}

/// A component with a fixed set of variants.
pub trait StyledComponent {
    /// The element the component renders as.
    const TAG: &'static str;

    fn variants() -> &'static Variants;

    fn render(props: &Props) -> Result<RenderedElement, StyleError> {
        render(Self::TAG, Self::variants(), props)
    }

    fn render_themed(
        props: &Props,
        table: &TokenTable,
        mode: impl ThemeModeSource,
    ) -> Result<RenderedElement, StyleError> {
        render_themed(Self::TAG, Self::variants(), props, table, mode)
    }
}
