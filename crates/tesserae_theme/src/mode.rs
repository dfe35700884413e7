use std::{fmt, str::FromStr};

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::TokenError;

/// Which token scope is read. Owned by the host environment, usually
/// derived from a class on the document root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Assoc)]
#[serde(rename_all = "lowercase")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn selector(&self) -> &'static str)]
pub enum ThemeMode {
    /// The root scope.
    #[default]
    #[assoc(name = "light")]
    #[assoc(selector = ":root")]
    Light,
    /// Root scope with dark overrides applied on top.
    #[assoc(name = "dark")]
    #[assoc(selector = ".dark")]
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl From<bool> for ThemeMode {
    /// `true` means dark.
    fn from(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TokenError::UnknownMode(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!(matches!(
            "dim".parse::<ThemeMode>(),
            Err(TokenError::UnknownMode(_))
        ));
    }

    #[test]
    fn selectors_match_scopes() {
        assert_eq!(ThemeMode::Light.selector(), ":root");
        assert_eq!(ThemeMode::Dark.selector(), ".dark");
    }

    #[test]
    fn from_bool() {
        assert!(ThemeMode::from(true).is_dark());
        assert_eq!(ThemeMode::from(false), ThemeMode::Light);
    }
}
