use serde::{Deserialize, Serialize};

use crate::{ThemeMode, TokenError, TokenValue};

/// A named design value with an optional dark-mode override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub root: TokenValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<TokenValue>,
}

impl Token {
    pub fn new(name: impl Into<String>, root: impl Into<TokenValue>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            dark: None,
        }
    }

    pub fn dark(mut self, dark: impl Into<TokenValue>) -> Self {
        self.dark = Some(dark.into());
        self
    }

    /// Parses both scopes from their CSS text.
    pub fn parse(
        name: impl Into<String>,
        root: &str,
        dark: Option<&str>,
    ) -> Result<Self, TokenError> {
        Ok(Self {
            name: name.into(),
            root: root.parse()?,
            dark: dark.map(str::parse::<TokenValue>).transpose()?,
        })
    }

    /// The value read under `mode`. Dark mode falls back to the root value.
    pub fn value(&self, mode: ThemeMode) -> &TokenValue {
        match mode {
            ThemeMode::Light => &self.root,
            ThemeMode::Dark => self.dark.as_ref().unwrap_or(&self.root),
        }
    }

    /// The custom property carrying this token, e.g. `--border`.
    pub fn custom_property(&self) -> String {
        custom_property(&self.name)
    }

    pub(crate) fn validate_name(&self) -> Result<(), TokenError> {
        if is_valid_name(&self.name) {
            Ok(())
        } else {
            Err(TokenError::InvalidName {
                name: self.name.clone(),
            })
        }
    }
}

pub fn custom_property(name: &str) -> String {
    format!("--{name}")
}

/// Token names become custom property idents: lowercase ascii,
/// digits and inner dashes.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// A token as written in a theme file: either one value for both modes or
/// a light value with an optional dark override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenEntry {
    Shared(TokenValue),
    Scoped {
        light: TokenValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dark: Option<TokenValue>,
    },
}

impl TokenEntry {
    pub fn into_token(self, name: impl Into<String>) -> Token {
        match self {
            Self::Shared(value) => Token::new(name, value),
            Self::Scoped { light, dark } => Token {
                name: name.into(),
                root: light,
                dark,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_falls_back_to_root() {
        let token = Token::parse("highlight", "50 100% 50%", None).unwrap();
        assert_eq!(token.value(ThemeMode::Light), &token.root);
        assert_eq!(token.value(ThemeMode::Dark), &token.root);
    }

    #[test]
    fn dark_override_is_read_in_dark_mode() {
        let token = Token::parse("background", "0 0% 100%", Some("240 85% 4%")).unwrap();
        assert_eq!(token.value(ThemeMode::Light).to_string(), "0 0% 100%");
        assert_eq!(token.value(ThemeMode::Dark).to_string(), "240 85% 4%");
    }

    #[test]
    fn custom_property_name() {
        let token = Token::parse("muted-foreground", "0 0% 45%", None).unwrap();
        assert_eq!(token.custom_property(), "--muted-foreground");
    }

    #[test]
    fn name_validation() {
        assert!(is_valid_name("primary-active-hover"));
        assert!(is_valid_name("radius"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("-border"));
        assert!(!is_valid_name("Border"));
        assert!(!is_valid_name("border color"));
    }

    #[test]
    fn entry_from_json() {
        let shared: TokenEntry = serde_json::from_str(r#""0.5rem""#).unwrap();
        assert_eq!(
            shared.into_token("radius").value(ThemeMode::Dark).to_string(),
            "0.5rem"
        );

        let scoped: TokenEntry =
            serde_json::from_str(r#"{ "light": "0 0% 100%", "dark": "240 85% 4%" }"#).unwrap();
        let token = scoped.into_token("background");
        assert_eq!(token.dark.unwrap().to_string(), "240 85% 4%");
    }
}
