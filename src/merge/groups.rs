#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use smallvec::SmallVec;

/// The buckets used to decide which of two conflicting classes wins.
///
/// Two classes with the same group (and the same modifiers) set the same
/// CSS property, so only the later one is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Assoc)]
#[func(pub fn name(&self) -> &'static str)]
pub enum UtilityGroup {
    #[assoc(name = "display")]
    Display,
    #[assoc(name = "position")]
    Position,
    #[assoc(name = "background-color")]
    BackgroundColor,
    #[assoc(name = "background-image")]
    BackgroundImage,
    #[assoc(name = "background-size")]
    BackgroundSize,
    #[assoc(name = "background-position")]
    BackgroundPosition,
    #[assoc(name = "background-repeat")]
    BackgroundRepeat,
    #[assoc(name = "background-attachment")]
    BackgroundAttachment,
    #[assoc(name = "background-clip")]
    BackgroundClip,
    #[assoc(name = "text-color")]
    TextColor,
    #[assoc(name = "font-size")]
    FontSize,
    #[assoc(name = "font-weight")]
    FontWeight,
    #[assoc(name = "font-family")]
    FontFamily,
    #[assoc(name = "text-align")]
    TextAlign,
    #[assoc(name = "line-height")]
    LineHeight,
    #[assoc(name = "letter-spacing")]
    LetterSpacing,
    #[assoc(name = "whitespace")]
    Whitespace,
    #[assoc(name = "border-width")]
    BorderWidth,
    #[assoc(name = "border-width-x")]
    BorderWidthX,
    #[assoc(name = "border-width-y")]
    BorderWidthY,
    #[assoc(name = "border-width-top")]
    BorderWidthTop,
    #[assoc(name = "border-width-right")]
    BorderWidthRight,
    #[assoc(name = "border-width-bottom")]
    BorderWidthBottom,
    #[assoc(name = "border-width-left")]
    BorderWidthLeft,
    #[assoc(name = "border-style")]
    BorderStyle,
    #[assoc(name = "border-color")]
    BorderColor,
    #[assoc(name = "radius")]
    Radius,
    #[assoc(name = "ring-width")]
    RingWidth,
    #[assoc(name = "ring-inset")]
    RingInset,
    #[assoc(name = "ring-color")]
    RingColor,
    #[assoc(name = "ring-offset-width")]
    RingOffsetWidth,
    #[assoc(name = "ring-offset-color")]
    RingOffsetColor,
    #[assoc(name = "shadow")]
    Shadow,
    #[assoc(name = "opacity")]
    Opacity,
    #[assoc(name = "padding")]
    Padding,
    #[assoc(name = "padding-x")]
    PaddingX,
    #[assoc(name = "padding-y")]
    PaddingY,
    #[assoc(name = "padding-top")]
    PaddingTop,
    #[assoc(name = "padding-right")]
    PaddingRight,
    #[assoc(name = "padding-bottom")]
    PaddingBottom,
    #[assoc(name = "padding-left")]
    PaddingLeft,
    #[assoc(name = "margin")]
    Margin,
    #[assoc(name = "margin-x")]
    MarginX,
    #[assoc(name = "margin-y")]
    MarginY,
    #[assoc(name = "margin-top")]
    MarginTop,
    #[assoc(name = "margin-right")]
    MarginRight,
    #[assoc(name = "margin-bottom")]
    MarginBottom,
    #[assoc(name = "margin-left")]
    MarginLeft,
    #[assoc(name = "gap")]
    Gap,
    #[assoc(name = "gap-x")]
    GapX,
    #[assoc(name = "gap-y")]
    GapY,
    #[assoc(name = "width")]
    Width,
    #[assoc(name = "min-width")]
    MinWidth,
    #[assoc(name = "max-width")]
    MaxWidth,
    #[assoc(name = "height")]
    Height,
    #[assoc(name = "min-height")]
    MinHeight,
    #[assoc(name = "max-height")]
    MaxHeight,
    #[assoc(name = "flex")]
    Flex,
    #[assoc(name = "flex-direction")]
    FlexDirection,
    #[assoc(name = "flex-wrap")]
    FlexWrap,
    #[assoc(name = "align-items")]
    AlignItems,
    #[assoc(name = "justify-content")]
    JustifyContent,
    #[assoc(name = "overflow")]
    Overflow,
    #[assoc(name = "overflow-x")]
    OverflowX,
    #[assoc(name = "overflow-y")]
    OverflowY,
    #[assoc(name = "inset")]
    Inset,
    #[assoc(name = "inset-x")]
    InsetX,
    #[assoc(name = "inset-y")]
    InsetY,
    #[assoc(name = "top")]
    Top,
    #[assoc(name = "right")]
    Right,
    #[assoc(name = "bottom")]
    Bottom,
    #[assoc(name = "left")]
    Left,
    #[assoc(name = "z-index")]
    ZIndex,
    #[assoc(name = "cursor")]
    Cursor,
    #[assoc(name = "transition")]
    Transition,
    #[assoc(name = "duration")]
    Duration,
}

impl UtilityGroup {
    /// The CSS property a declaration class (`border-color:red`) names.
    pub fn property(&self) -> Option<&'static str> {
        use UtilityGroup::*;

        Some(match self {
            Display => "display",
            Position => "position",
            BackgroundColor => "background-color",
            BackgroundImage => "background-image",
            BackgroundSize => "background-size",
            BackgroundPosition => "background-position",
            BackgroundRepeat => "background-repeat",
            BackgroundAttachment => "background-attachment",
            BackgroundClip => "background-clip",
            TextColor => "color",
            FontSize => "font-size",
            FontWeight => "font-weight",
            FontFamily => "font-family",
            TextAlign => "text-align",
            LineHeight => "line-height",
            LetterSpacing => "letter-spacing",
            Whitespace => "white-space",
            BorderWidth => "border-width",
            BorderWidthTop => "border-top-width",
            BorderWidthRight => "border-right-width",
            BorderWidthBottom => "border-bottom-width",
            BorderWidthLeft => "border-left-width",
            BorderStyle => "border-style",
            BorderColor => "border-color",
            Radius => "border-radius",
            Shadow => "box-shadow",
            Opacity => "opacity",
            Padding => "padding",
            PaddingTop => "padding-top",
            PaddingRight => "padding-right",
            PaddingBottom => "padding-bottom",
            PaddingLeft => "padding-left",
            Margin => "margin",
            MarginTop => "margin-top",
            MarginRight => "margin-right",
            MarginBottom => "margin-bottom",
            MarginLeft => "margin-left",
            Gap => "gap",
            GapX => "column-gap",
            GapY => "row-gap",
            Width => "width",
            MinWidth => "min-width",
            MaxWidth => "max-width",
            Height => "height",
            MinHeight => "min-height",
            MaxHeight => "max-height",
            Flex => "flex",
            FlexDirection => "flex-direction",
            FlexWrap => "flex-wrap",
            AlignItems => "align-items",
            JustifyContent => "justify-content",
            Overflow => "overflow",
            OverflowX => "overflow-x",
            OverflowY => "overflow-y",
            Inset => "inset",
            Top => "top",
            Right => "right",
            Bottom => "bottom",
            Left => "left",
            ZIndex => "z-index",
            Cursor => "cursor",
            Transition => "transition-property",
            Duration => "transition-duration",
            BorderWidthX | BorderWidthY | RingWidth | RingInset | RingColor | RingOffsetWidth
            | RingOffsetColor | PaddingX | PaddingY | MarginX | MarginY | InsetX | InsetY => {
                return None;
            }
        })
    }

    /// Groups whose classes are removed when a later class of this group
    /// is applied, e.g. `p-4` after `px-2`.
    pub fn conflicts(&self) -> &'static [UtilityGroup] {
        use UtilityGroup::*;

        match self {
            Padding => &[
                PaddingX,
                PaddingY,
                PaddingTop,
                PaddingRight,
                PaddingBottom,
                PaddingLeft,
            ],
            PaddingX => &[PaddingRight, PaddingLeft],
            PaddingY => &[PaddingTop, PaddingBottom],
            Margin => &[
                MarginX,
                MarginY,
                MarginTop,
                MarginRight,
                MarginBottom,
                MarginLeft,
            ],
            MarginX => &[MarginRight, MarginLeft],
            MarginY => &[MarginTop, MarginBottom],
            BorderWidth => &[
                BorderWidthX,
                BorderWidthY,
                BorderWidthTop,
                BorderWidthRight,
                BorderWidthBottom,
                BorderWidthLeft,
            ],
            BorderWidthX => &[BorderWidthRight, BorderWidthLeft],
            BorderWidthY => &[BorderWidthTop, BorderWidthBottom],
            Gap => &[GapX, GapY],
            Overflow => &[OverflowX, OverflowY],
            Inset => &[InsetX, InsetY, Top, Right, Bottom, Left],
            InsetX => &[Right, Left],
            InsetY => &[Top, Bottom],
            _ => &[],
        }
    }

    /// Whether the group's value names a color.
    pub fn is_color(&self) -> bool {
        matches!(
            self,
            Self::BackgroundColor
                | Self::TextColor
                | Self::BorderColor
                | Self::RingColor
                | Self::RingOffsetColor
        )
    }

    /// Looks a group up by CSS property or by group name.
    pub fn from_property(property: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|group| group.property() == Some(property))
            .or_else(|| Self::ALL.iter().copied().find(|group| group.name() == property))
    }

    pub const ALL: &'static [UtilityGroup] = &[
        Self::Display,
        Self::Position,
        Self::BackgroundColor,
        Self::BackgroundImage,
        Self::BackgroundSize,
        Self::BackgroundPosition,
        Self::BackgroundRepeat,
        Self::BackgroundAttachment,
        Self::BackgroundClip,
        Self::TextColor,
        Self::FontSize,
        Self::FontWeight,
        Self::FontFamily,
        Self::TextAlign,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::Whitespace,
        Self::BorderWidth,
        Self::BorderWidthX,
        Self::BorderWidthY,
        Self::BorderWidthTop,
        Self::BorderWidthRight,
        Self::BorderWidthBottom,
        Self::BorderWidthLeft,
        Self::BorderStyle,
        Self::BorderColor,
        Self::Radius,
        Self::RingWidth,
        Self::RingInset,
        Self::RingColor,
        Self::RingOffsetWidth,
        Self::RingOffsetColor,
        Self::Shadow,
        Self::Opacity,
        Self::Padding,
        Self::PaddingX,
        Self::PaddingY,
        Self::PaddingTop,
        Self::PaddingRight,
        Self::PaddingBottom,
        Self::PaddingLeft,
        Self::Margin,
        Self::MarginX,
        Self::MarginY,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::Gap,
        Self::GapX,
        Self::GapY,
        Self::Width,
        Self::MinWidth,
        Self::MaxWidth,
        Self::Height,
        Self::MinHeight,
        Self::MaxHeight,
        Self::Flex,
        Self::FlexDirection,
        Self::FlexWrap,
        Self::AlignItems,
        Self::JustifyContent,
        Self::Overflow,
        Self::OverflowX,
        Self::OverflowY,
        Self::Inset,
        Self::InsetX,
        Self::InsetY,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::ZIndex,
        Self::Cursor,
        Self::Transition,
        Self::Duration,
    ];
}

enum ValueKind {
    Any,
    /// Digits, or an arbitrary value starting with one: `2`, `[3px]`.
    Number,
    Keywords(&'static [&'static str]),
}

impl ValueKind {
    fn matches(&self, value: &str) -> bool {
        match self {
            ValueKind::Any => true,
            ValueKind::Number => {
                let inner = value
                    .strip_prefix('[')
                    .and_then(|value| value.strip_suffix(']'))
                    .unwrap_or(value);

                inner.starts_with(|c: char| c.is_ascii_digit())
                    && (inner.len() != value.len() || inner.chars().all(|c| c.is_ascii_digit()))
            }
            ValueKind::Keywords(keywords) => keywords.contains(&value),
        }
    }
}

struct GroupRule {
    prefix: &'static str,
    value: ValueKind,
    group: UtilityGroup,
}

const fn rule(prefix: &'static str, value: ValueKind, group: UtilityGroup) -> GroupRule {
    GroupRule {
        prefix,
        value,
        group,
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const FLEX_DIRECTIONS: &[&str] = &["row", "row-reverse", "col", "col-reverse"];
const FLEX_WRAPS: &[&str] = &["wrap", "wrap-reverse", "nowrap"];
const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const BG_REPEATS: &[&str] = &[
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
];
const BG_ATTACHMENTS: &[&str] = &["fixed", "local", "scroll"];

/// Whole classes that carry no value.
const EXACT: &[(&str, UtilityGroup)] = &[
    ("block", UtilityGroup::Display),
    ("inline-block", UtilityGroup::Display),
    ("inline", UtilityGroup::Display),
    ("flex", UtilityGroup::Display),
    ("inline-flex", UtilityGroup::Display),
    ("grid", UtilityGroup::Display),
    ("inline-grid", UtilityGroup::Display),
    ("contents", UtilityGroup::Display),
    ("hidden", UtilityGroup::Display),
    ("static", UtilityGroup::Position),
    ("fixed", UtilityGroup::Position),
    ("absolute", UtilityGroup::Position),
    ("relative", UtilityGroup::Position),
    ("sticky", UtilityGroup::Position),
    ("border", UtilityGroup::BorderWidth),
    ("border-x", UtilityGroup::BorderWidthX),
    ("border-y", UtilityGroup::BorderWidthY),
    ("border-t", UtilityGroup::BorderWidthTop),
    ("border-r", UtilityGroup::BorderWidthRight),
    ("border-b", UtilityGroup::BorderWidthBottom),
    ("border-l", UtilityGroup::BorderWidthLeft),
    ("bg-none", UtilityGroup::BackgroundImage),
    ("rounded", UtilityGroup::Radius),
    ("ring", UtilityGroup::RingWidth),
    ("ring-inset", UtilityGroup::RingInset),
    ("shadow", UtilityGroup::Shadow),
    ("transition", UtilityGroup::Transition),
];

/// Prefix rules, first match wins. Longer prefixes come before the
/// prefixes they start with.
const RULES: &[GroupRule] = &[
    rule("bg-gradient-to-", ValueKind::Any, UtilityGroup::BackgroundImage),
    rule("bg-clip-", ValueKind::Any, UtilityGroup::BackgroundClip),
    rule("bg-", ValueKind::Keywords(BG_SIZES), UtilityGroup::BackgroundSize),
    rule("bg-", ValueKind::Keywords(BG_POSITIONS), UtilityGroup::BackgroundPosition),
    rule("bg-", ValueKind::Keywords(BG_REPEATS), UtilityGroup::BackgroundRepeat),
    rule("bg-", ValueKind::Keywords(BG_ATTACHMENTS), UtilityGroup::BackgroundAttachment),
    rule("bg-", ValueKind::Any, UtilityGroup::BackgroundColor),
    rule("text-", ValueKind::Keywords(FONT_SIZES), UtilityGroup::FontSize),
    rule("text-", ValueKind::Keywords(TEXT_ALIGNS), UtilityGroup::TextAlign),
    rule("text-", ValueKind::Any, UtilityGroup::TextColor),
    rule("font-", ValueKind::Keywords(FONT_WEIGHTS), UtilityGroup::FontWeight),
    rule("font-", ValueKind::Any, UtilityGroup::FontFamily),
    rule("leading-", ValueKind::Any, UtilityGroup::LineHeight),
    rule("tracking-", ValueKind::Any, UtilityGroup::LetterSpacing),
    rule("whitespace-", ValueKind::Any, UtilityGroup::Whitespace),
    rule("border-x-", ValueKind::Number, UtilityGroup::BorderWidthX),
    rule("border-y-", ValueKind::Number, UtilityGroup::BorderWidthY),
    rule("border-t-", ValueKind::Number, UtilityGroup::BorderWidthTop),
    rule("border-r-", ValueKind::Number, UtilityGroup::BorderWidthRight),
    rule("border-b-", ValueKind::Number, UtilityGroup::BorderWidthBottom),
    rule("border-l-", ValueKind::Number, UtilityGroup::BorderWidthLeft),
    rule("border-", ValueKind::Keywords(BORDER_STYLES), UtilityGroup::BorderStyle),
    rule("border-", ValueKind::Number, UtilityGroup::BorderWidth),
    rule("border-", ValueKind::Any, UtilityGroup::BorderColor),
    rule("rounded-", ValueKind::Any, UtilityGroup::Radius),
    rule("ring-offset-", ValueKind::Number, UtilityGroup::RingOffsetWidth),
    rule("ring-offset-", ValueKind::Any, UtilityGroup::RingOffsetColor),
    rule("ring-", ValueKind::Number, UtilityGroup::RingWidth),
    rule("ring-", ValueKind::Any, UtilityGroup::RingColor),
    rule("shadow-", ValueKind::Any, UtilityGroup::Shadow),
    rule("opacity-", ValueKind::Any, UtilityGroup::Opacity),
    rule("px-", ValueKind::Any, UtilityGroup::PaddingX),
    rule("py-", ValueKind::Any, UtilityGroup::PaddingY),
    rule("pt-", ValueKind::Any, UtilityGroup::PaddingTop),
    rule("pr-", ValueKind::Any, UtilityGroup::PaddingRight),
    rule("pb-", ValueKind::Any, UtilityGroup::PaddingBottom),
    rule("pl-", ValueKind::Any, UtilityGroup::PaddingLeft),
    rule("p-", ValueKind::Any, UtilityGroup::Padding),
    rule("mx-", ValueKind::Any, UtilityGroup::MarginX),
    rule("my-", ValueKind::Any, UtilityGroup::MarginY),
    rule("mt-", ValueKind::Any, UtilityGroup::MarginTop),
    rule("mr-", ValueKind::Any, UtilityGroup::MarginRight),
    rule("mb-", ValueKind::Any, UtilityGroup::MarginBottom),
    rule("ml-", ValueKind::Any, UtilityGroup::MarginLeft),
    rule("m-", ValueKind::Any, UtilityGroup::Margin),
    rule("gap-x-", ValueKind::Any, UtilityGroup::GapX),
    rule("gap-y-", ValueKind::Any, UtilityGroup::GapY),
    rule("gap-", ValueKind::Any, UtilityGroup::Gap),
    rule("min-w-", ValueKind::Any, UtilityGroup::MinWidth),
    rule("max-w-", ValueKind::Any, UtilityGroup::MaxWidth),
    rule("w-", ValueKind::Any, UtilityGroup::Width),
    rule("min-h-", ValueKind::Any, UtilityGroup::MinHeight),
    rule("max-h-", ValueKind::Any, UtilityGroup::MaxHeight),
    rule("h-", ValueKind::Any, UtilityGroup::Height),
    rule("flex-", ValueKind::Keywords(FLEX_DIRECTIONS), UtilityGroup::FlexDirection),
    rule("flex-", ValueKind::Keywords(FLEX_WRAPS), UtilityGroup::FlexWrap),
    rule("flex-", ValueKind::Any, UtilityGroup::Flex),
    rule("items-", ValueKind::Any, UtilityGroup::AlignItems),
    rule("justify-", ValueKind::Any, UtilityGroup::JustifyContent),
    rule("overflow-x-", ValueKind::Any, UtilityGroup::OverflowX),
    rule("overflow-y-", ValueKind::Any, UtilityGroup::OverflowY),
    rule("overflow-", ValueKind::Any, UtilityGroup::Overflow),
    rule("inset-x-", ValueKind::Any, UtilityGroup::InsetX),
    rule("inset-y-", ValueKind::Any, UtilityGroup::InsetY),
    rule("inset-", ValueKind::Any, UtilityGroup::Inset),
    rule("top-", ValueKind::Any, UtilityGroup::Top),
    rule("right-", ValueKind::Any, UtilityGroup::Right),
    rule("bottom-", ValueKind::Any, UtilityGroup::Bottom),
    rule("left-", ValueKind::Any, UtilityGroup::Left),
    rule("z-", ValueKind::Any, UtilityGroup::ZIndex),
    rule("cursor-", ValueKind::Any, UtilityGroup::Cursor),
    rule("transition-", ValueKind::Any, UtilityGroup::Transition),
    rule("duration-", ValueKind::Any, UtilityGroup::Duration),
];

/// A class split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    pub class: &'a str,
    /// Variant modifiers such as `hover` or `dark`, in written order.
    pub modifiers: SmallVec<[&'a str; 2]>,
    pub important: bool,
    /// Written as a CSS declaration, `border-color:red` or `[color:red]`.
    pub arbitrary: bool,
    pub group: Option<UtilityGroup>,
    /// What follows the group's prefix, e.g. `card` in `bg-card`.
    pub value: &'a str,
}

/// The identity a class is deduplicated by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassKey {
    modifiers: String,
    important: bool,
    group: GroupKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Known(UtilityGroup),
    // Unclassified classes only collide with an identical class.
    Singleton(String),
}

impl ClassKey {
    pub fn group(&self) -> Option<UtilityGroup> {
        match self.group {
            GroupKey::Known(group) => Some(group),
            GroupKey::Singleton(_) => None,
        }
    }

    /// The key a conflicting group would have under the same modifiers.
    pub(crate) fn with_group(&self, group: UtilityGroup) -> ClassKey {
        ClassKey {
            modifiers: self.modifiers.clone(),
            important: self.important,
            group: GroupKey::Known(group),
        }
    }
}

impl<'a> ParsedClass<'a> {
    pub fn key(&self) -> ClassKey {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();

        ClassKey {
            modifiers: modifiers.join(":"),
            important: self.important,
            group: match self.group {
                Some(group) => GroupKey::Known(group),
                None => GroupKey::Singleton(self.class.to_owned()),
            },
        }
    }
}

/// Splits `class` on top-level `:`, ignoring colons inside `[...]`.
fn split_modifiers(class: &str) -> SmallVec<[&str; 3]> {
    let mut parts = SmallVec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                parts.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&class[start..]);
    parts
}

/// Classifies a single class by the static group table.
pub fn parse_class(class: &str) -> ParsedClass<'_> {
    let mut segments = split_modifiers(class);

    // `border-color:red` is a declaration, not a `border-color` modifier.
    if segments.len() >= 2 {
        let property = segments[segments.len() - 2];
        let (important, property) = match property.strip_prefix('!') {
            Some(property) => (true, property),
            None => (false, property),
        };

        if let Some(group) = UtilityGroup::from_property(property) {
            let value = segments[segments.len() - 1];
            segments.truncate(segments.len() - 2);

            return ParsedClass {
                class,
                modifiers: segments.into_iter().collect(),
                important,
                arbitrary: true,
                group: Some(group),
                value,
            };
        }
    }

    let base = segments.pop().unwrap_or_default();
    let modifiers = segments.into_iter().collect();

    let (important, base) = match base.strip_prefix('!') {
        Some(base) => (true, base),
        None => (false, base),
    };

    // Negative values (`-mx-2`) share the group of their positive form.
    let base = base.strip_prefix('-').unwrap_or(base);

    let arbitrary = base.starts_with('[');
    let (group, value) = classify(base).unzip();

    ParsedClass {
        class,
        modifiers,
        important,
        arbitrary,
        group,
        value: value.unwrap_or(base),
    }
}

fn classify(base: &str) -> Option<(UtilityGroup, &str)> {
    if let Some(inner) = base.strip_prefix('[').and_then(|base| base.strip_suffix(']'))
        && let Some((property, value)) = inner.split_once(':')
    {
        return UtilityGroup::from_property(property).map(|group| (group, value));
    }

    if let Some((_, group)) = EXACT.iter().find(|(class, _)| *class == base) {
        return Some((*group, ""));
    }

    RULES.iter().find_map(|rule| {
        let value = base.strip_prefix(rule.prefix)?;
        (!value.is_empty() && rule.value.matches(value)).then_some((rule.group, value))
    })
}
