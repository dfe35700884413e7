use std::{ops::Deref, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tesserae_theme::{Token, TokenEntry, TokenError, TokenTable, deserializers::de_token_entries};

use crate::error::ThemeLoadError;

/// A theme file: a name and the tokens it defines.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    #[serde(deserialize_with = "de_token_entries")]
    pub tokens: IndexMap<String, TokenEntry>,
}

cfg_if::cfg_if!(
    if #[cfg(feature = "builtin-theme")] {
        macro_rules! generate_builtin_themes {
            ( $( [$path:literal, $name:ident] ),+ ) => {
                $(
                    pub const $name: LazyLockTheme = {
                        static THEME: std::sync::LazyLock<Theme> =
                            std::sync::LazyLock::new(|| Theme::from_string(include_str!($path)).unwrap());

                        fn theme() -> &'static Theme {
                            &THEME
                        }

                        LazyLockTheme::new(theme)
                    };
                )+
            };
        }

        impl Theme {
            generate_builtin_themes!(["../../themes/default.json", DEFAULT]);
        }
    }
);

/// A handle to a theme parsed once, on first use, into a `static`.
#[derive(Clone, Copy)]
pub struct LazyLockTheme(fn() -> &'static Theme);

impl LazyLockTheme {
    #[inline(always)]
    pub const fn new(f: fn() -> &'static Theme) -> Self {
        Self(f)
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        (self.0)()
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        (self.0)()
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeLoadError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Theme, ThemeLoadError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeLoadError> {
        Self::from_slice(&std::fs::read(path)?)
    }

    /// The theme's tokens, in file order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens
            .iter()
            .map(|(name, entry)| entry.clone().into_token(name.as_str()))
    }

    pub fn to_table(&self) -> Result<TokenTable, TokenError> {
        TokenTable::from_tokens(self.tokens())
    }
}
