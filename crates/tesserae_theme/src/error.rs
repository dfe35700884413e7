use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token `{name}` was never registered.")]
    UnknownToken { name: String },
    #[error("Token `{name}` is already registered with a different definition.")]
    DuplicateToken { name: String },
    #[error("`{name}` is not a valid token name.")]
    InvalidName { name: String },
    #[error("Could not parse token value `{value}`: {reason}.")]
    InvalidValue { value: String, reason: &'static str },
    #[error("`{0}` is not a theme mode.")]
    UnknownMode(String),
    #[error("A token table has already been installed.")]
    AlreadyInstalled,
}

impl TokenError {
    pub(crate) fn invalid_value(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidValue {
            value: value.into(),
            reason,
        }
    }
}
