#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use tesserae_theme::{TokenError, TokenTable, custom_property};

use crate::merge::{UtilityGroup, parse_class};

/// The style roles a color token can be consumed in.
///
/// The classes produced for a role go through the token's custom property,
/// so the same class is valid in every theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn prefix(&self) -> &'static str)]
#[func(pub fn property(&self) -> &'static str)]
#[func(pub fn group(&self) -> UtilityGroup)]
pub enum UtilityRole {
    #[assoc(prefix = "bg")]
    #[assoc(property = "background-color")]
    #[assoc(group = UtilityGroup::BackgroundColor)]
    Background,
    #[assoc(prefix = "text")]
    #[assoc(property = "color")]
    #[assoc(group = UtilityGroup::TextColor)]
    Foreground,
    #[assoc(prefix = "border")]
    #[assoc(property = "border-color")]
    #[assoc(group = UtilityGroup::BorderColor)]
    Border,
    #[assoc(prefix = "ring")]
    #[assoc(property = "--tw-ring-color")]
    #[assoc(group = UtilityGroup::RingColor)]
    Ring,
    #[assoc(prefix = "ring-offset")]
    #[assoc(property = "--tw-ring-offset-color")]
    #[assoc(group = UtilityGroup::RingOffsetColor)]
    RingOffset,
}

impl UtilityRole {
    pub const ALL: [UtilityRole; 5] = [
        UtilityRole::Background,
        UtilityRole::Foreground,
        UtilityRole::Border,
        UtilityRole::Ring,
        UtilityRole::RingOffset,
    ];

    pub fn from_group(group: UtilityGroup) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.group() == group)
    }
}

/// The name of the dimension token the radius scale is derived from.
pub const RADIUS_TOKEN: &str = "radius";

/// Radius classes derived from the `radius` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn class(&self) -> &'static str)]
#[func(pub fn value(&self) -> &'static str)]
pub enum RadiusKind {
    #[assoc(class = "rounded-lg")]
    #[assoc(value = "var(--radius, 0.5rem)")]
    Lg,
    #[assoc(class = "rounded-md")]
    #[assoc(value = "calc(var(--radius, 0.5rem) - 2px)")]
    Md,
    #[assoc(class = "rounded-sm")]
    #[assoc(value = "calc(var(--radius, 0.5rem) - 4px)")]
    Sm,
}

impl RadiusKind {
    pub const ALL: [RadiusKind; 3] = [RadiusKind::Lg, RadiusKind::Md, RadiusKind::Sm];

    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class() == class)
    }

    /// The `border-radius` declaration the class stands for.
    pub fn declaration(&self) -> String {
        format!("border-radius: {}", self.value())
    }
}

/// The class consuming `token` in `role`, e.g. `bg-card`.
pub fn class_for(token: &str, role: UtilityRole) -> String {
    format!("{}-{token}", role.prefix())
}

/// Like [`class_for`], but fails if `token` isn't registered in `table`.
pub fn class_for_checked(
    table: &TokenTable,
    token: &str,
    role: UtilityRole,
) -> Result<String, TokenError> {
    if !table.contains(token) {
        return Err(TokenError::UnknownToken {
            name: token.to_owned(),
        });
    }

    Ok(class_for(token, role))
}

/// The CSS declaration behind [`class_for`], e.g.
/// `background-color: hsl(var(--card))`.
pub fn declaration_for(token: &str, role: UtilityRole) -> String {
    format!("{}: hsl(var({}))", role.property(), custom_property(token))
}

/// A design token used by a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenReference<'a> {
    Color { role: UtilityRole, token: &'a str },
    Radius(RadiusKind),
}

impl<'a> TokenReference<'a> {
    pub fn token(&self) -> &'a str {
        match self {
            Self::Color { token, .. } => *token,
            Self::Radius(_) => RADIUS_TOKEN,
        }
    }
}

const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

const KEYWORD_COLORS: &[&str] = &["transparent", "current", "inherit", "white", "black"];

/// Whether a color value is a literal rather than a token name.
fn is_literal_color(value: &str) -> bool {
    if value.starts_with('[') || KEYWORD_COLORS.contains(&value) {
        return true;
    }

    value.rsplit_once('-').is_some_and(|(palette, shade)| {
        PALETTE.contains(&palette) && !shade.is_empty() && shade.chars().all(|c| c.is_ascii_digit())
    })
}

/// The token `class` consumes, if any.
///
/// Color classes whose value isn't a literal palette color are token
/// references: `hover:bg-primary-hover/90` references `primary-hover`,
/// `bg-neutral-800` references nothing.
pub fn token_reference(class: &str) -> Option<TokenReference<'_>> {
    let parsed = parse_class(class);

    if parsed.arbitrary {
        return None;
    }

    let role = UtilityRole::from_group(parsed.group?);

    let Some(role) = role else {
        let base = class.rsplit(':').next().unwrap_or(class);
        return RadiusKind::from_class(base).map(TokenReference::Radius);
    };

    let token = parsed
        .value
        .split_once('/')
        .map_or(parsed.value, |(token, _opacity)| token);

    (!token.is_empty() && !is_literal_color(token))
        .then_some(TokenReference::Color { role, token })
}
