use tesserae_theme::TokenTable;

use crate::{
    components::{Badge, Button, StyledComponent},
    error::StyleError,
    theme::Theme,
};

/// Installs `theme` as the process-wide token table.
///
/// Must run once, before rendering starts. Every builtin component is
/// checked against the table first, so a theme missing a token they use
/// is rejected here instead of at render time.
pub fn init_with(theme: impl AsRef<Theme>) -> Result<&'static TokenTable, StyleError> {
    let theme = theme.as_ref();
    let table = theme.to_table()?;

    validate_builtin_components(&table)?;

    let installed = tesserae_theme::install(table)?;
    tracing::debug!(theme = %theme.name, "initialized styles");

    Ok(installed)
}

/// Installs the builtin theme.
#[cfg(feature = "builtin-theme")]
pub fn init() -> Result<&'static TokenTable, StyleError> {
    init_with(Theme::DEFAULT)
}

pub fn validate_builtin_components(table: &TokenTable) -> Result<(), StyleError> {
    Badge::variants().validate_tokens(table)?;
    Button::variants().validate_tokens(table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_themes_are_rejected_before_install() {
        let theme = Theme::from_string(
            r#"{ "name": "bare", "tokens": { "card": "0 0% 100%", "card-foreground": "240 85% 2%" } }"#,
        )
        .unwrap();

        let err = init_with(&theme).unwrap_err();

        assert!(matches!(err, StyleError::Token(_)));
        assert!(tesserae_theme::installed().is_none());
    }

    #[cfg(feature = "builtin-theme")]
    #[test]
    fn builtin_theme_covers_builtin_components() {
        let table = Theme::DEFAULT.to_table().unwrap();
        assert_eq!(validate_builtin_components(&table), Ok(()));
    }
}
