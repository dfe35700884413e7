use std::{fmt, str::FromStr};

use enum_assoc::Assoc;
use serde::{Serialize, Serializer};

use crate::TokenError;

/// An HSL color stored as the bare channel triple used inside
/// `hsl(var(--token))`, e.g. `220 14% 96%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl HslColor {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// The value as a complete CSS color, e.g. `hsl(220 14% 96%)`.
    pub fn to_css(&self) -> String {
        format!("hsl({self})")
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

impl FromStr for HslColor {
    type Err = TokenError;

    /// Accepts both `220 14% 96%` and the comma separated `240, 67%, 14%`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let &[hue, saturation, lightness] = channels.as_slice() else {
            return Err(TokenError::invalid_value(s, "expected three hsl channels"));
        };

        let hue = hue.strip_suffix("deg").unwrap_or(hue);
        let hue = parse_number(s, hue)?;

        let saturation = parse_percent(s, saturation)?;
        let lightness = parse_percent(s, lightness)?;

        Ok(Self::new(hue, saturation, lightness))
    }
}

fn parse_number(source: &str, part: &str) -> Result<f32, TokenError> {
    match part.parse::<f32>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(TokenError::invalid_value(source, "channel is not a number")),
    }
}

fn parse_percent(source: &str, part: &str) -> Result<f32, TokenError> {
    let Some(number) = part.strip_suffix('%') else {
        return Err(TokenError::invalid_value(
            source,
            "saturation and lightness must end with '%'",
        ));
    };

    let number = parse_number(source, number)?;

    if !(0.0..=100.0).contains(&number) {
        return Err(TokenError::invalid_value(
            source,
            "percentages must be between 0 and 100",
        ));
    }

    Ok(number)
}

/// Units a dimension token may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn suffix(&self) -> &'static str)]
pub enum LengthUnit {
    #[assoc(suffix = "px")]
    Px,
    #[assoc(suffix = "rem")]
    Rem,
    #[assoc(suffix = "em")]
    Em,
    #[assoc(suffix = "%")]
    Percent,
}

impl LengthUnit {
    // `rem` has to be tried before `em`.
    const PARSE_ORDER: [LengthUnit; 4] = [
        LengthUnit::Rem,
        LengthUnit::Px,
        LengthUnit::Em,
        LengthUnit::Percent,
    ];
}

/// A CSS length such as `0.5rem` or `4px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Dimension {
    pub fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub fn rem(value: f32) -> Self {
        Self::new(value, LengthUnit::Rem)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Dimension {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // A unitless zero is a valid CSS length.
        if trimmed == "0" {
            return Ok(Self::px(0.));
        }

        for unit in LengthUnit::PARSE_ORDER {
            if let Some(number) = trimmed.strip_suffix(unit.suffix())
                && let Ok(value) = number.parse::<f32>()
                && value.is_finite()
            {
                return Ok(Self::new(value, unit));
            }
        }

        Err(TokenError::invalid_value(
            s,
            "expected a number ending with 'px', 'rem', 'em' or '%'",
        ))
    }
}

/// The value a token resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    Color(HslColor),
    Dimension(Dimension),
}

impl TokenValue {
    pub fn as_color(&self) -> Option<&HslColor> {
        match self {
            Self::Color(color) => Some(color),
            Self::Dimension(_) => None,
        }
    }

    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            Self::Dimension(dimension) => Some(dimension),
            Self::Color(_) => None,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => color.fmt(f),
            Self::Dimension(dimension) => dimension.fmt(f),
        }
    }
}

impl FromStr for TokenValue {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(TokenError::invalid_value(s, "value is empty"));
        }

        let single_part = !trimmed.contains(|c: char| c == ',' || c.is_whitespace());

        if single_part {
            trimmed.parse().map(Self::Dimension)
        } else {
            trimmed.parse().map(Self::Color)
        }
    }
}

impl From<HslColor> for TokenValue {
    fn from(value: HslColor) -> Self {
        Self::Color(value)
    }
}

impl From<Dimension> for TokenValue {
    fn from(value: Dimension) -> Self {
        Self::Dimension(value)
    }
}

impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
