use std::{borrow::Cow, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use smallvec::SmallVec;

use crate::theme::Theme;

/// Theme files looked up by name across several providers. The first
/// provider that has a theme wins.
pub struct Themes<const N: usize> {
    providers: SmallVec<[Box<dyn ThemeProvider>; N]>,
}

impl<const N: usize> Themes<N> {
    pub fn new(providers: [Box<dyn ThemeProvider>; N]) -> Themes<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }

    pub fn load(&self, name: &str) -> Result<Theme> {
        if name.is_empty() {
            return Err(anyhow!("theme name can't be empty"));
        }

        for provider in &self.providers {
            if let Some(bytes) = provider.get(name) {
                tracing::debug!(theme = name, "loading theme");

                return Theme::from_slice(&bytes)
                    .with_context(|| format!("theme \"{name}\" is malformed"));
            }
        }

        Err(anyhow!("could not find theme \"{name}\""))
    }

    /// Every theme name any provider knows, without duplicates.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for provider in &self.providers {
            for name in provider.list()? {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        Ok(names)
    }
}

#[macro_export]
macro_rules! themes {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::assets::Themes::new([
            $( Box::new($item) ),*
        ])
    };
}

pub trait ThemeProvider: Send + Sync {
    /// The raw contents of the theme called `name`.
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self) -> Result<Vec<String>>;
}

/// Reads `<name>.json` files from a directory.
#[derive(Debug, Clone)]
pub struct DirectoryThemes(pub PathBuf);

impl ThemeProvider for DirectoryThemes {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        std::fs::read(self.0.join(format!("{name}.json")))
            .ok()
            .map(Cow::Owned)
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.0)
            .with_context(|| format!("could not read {}", self.0.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();

            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                names.push(stem.to_string_lossy().into_owned());
            }
        }

        names.sort();
        Ok(names)
    }
}
