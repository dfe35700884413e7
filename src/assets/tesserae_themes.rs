#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::borrow::Cow;

use anyhow::Result;
use rust_embed::RustEmbed;

use crate::assets::ThemeProvider;

/// Theme files bundled with the crate.
#[derive(RustEmbed)]
#[folder = "themes/"]
#[include = "*.json"]
#[exclude = "*.DS_Store"]
pub struct EmbeddedThemes;

impl ThemeProvider for EmbeddedThemes {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(&format!("{name}.json")).map(|f| f.data)
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(EmbeddedThemes::iter()
            .filter_map(|path| path.strip_suffix(".json").map(str::to_owned))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{theme::Theme, themes};

    #[test]
    fn embeds_the_default_theme() {
        assert!(EmbeddedThemes.list().unwrap().contains(&"default".to_owned()));

        let theme = themes![EmbeddedThemes].load("default").unwrap();
        assert_eq!(theme, *Theme::DEFAULT);
    }
}
