use tesserae_theme::TokenError;
use thiserror::Error;

/// Everything that can go wrong while resolving a component's style.
///
/// These are programming or packaging errors. They are surfaced to the
/// caller as-is and never recovered from with a fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("`{option}` is not an option of axis `{axis}`, expected one of: {}.", allowed.join(", "))]
    InvalidVariantOption {
        axis: String,
        option: String,
        allowed: Vec<String>,
    },
    #[error("`{axis}` is not a variant axis of this component.")]
    UnknownVariantAxis { axis: String },
    #[error("The default `{default}` of axis `{axis}` is not one of its options.")]
    InvalidDefaultOption { axis: String, default: String },
    #[error("Axis `{axis}` is declared more than once.")]
    DuplicateVariantAxis { axis: String },
}

/// Failure to read or parse a theme file.
#[derive(Error, Debug)]
pub enum ThemeLoadError {
    #[error("Could not read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse theme: {0}")]
    Json(#[from] serde_json::Error),
}

impl StyleError {
    pub fn unknown_token(name: impl Into<String>) -> Self {
        Self::Token(TokenError::UnknownToken { name: name.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_lists_allowed_options() {
        let err = StyleError::InvalidVariantOption {
            axis: "variant".into(),
            option: "primary".into(),
            allowed: vec!["default".into(), "secondary".into()],
        };

        assert_eq!(
            err.to_string(),
            "`primary` is not an option of axis `variant`, expected one of: default, secondary."
        );
    }

    #[test]
    fn token_errors_are_transparent() {
        let err: StyleError = TokenError::UnknownToken {
            name: "card".into(),
        }
        .into();

        assert_eq!(err.to_string(), "Token `card` was never registered.");
        assert_eq!(err, StyleError::unknown_token("card"));
    }
}
