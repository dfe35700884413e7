use tesserae_theme::ThemeMode;

/// Anything the host can hand over as the current theme mode.
///
/// The mode is owned by the environment. It is read on every themed
/// resolution and never written back.
pub trait ThemeModeSource {
    fn theme_mode(&self) -> ThemeMode;
}

impl ThemeModeSource for ThemeMode {
    fn theme_mode(&self) -> ThemeMode {
        *self
    }
}

/// `true` means dark.
impl ThemeModeSource for bool {
    fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from(*self)
    }
}

/// The `class` attribute of the document root. Dark mode is active when
/// it contains the `dark` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootClasses<'a>(pub &'a str);

impl ThemeModeSource for RootClasses<'_> {
    fn theme_mode(&self) -> ThemeMode {
        self.0.split_whitespace().any(|class| class == "dark").into()
    }
}

impl<T: ThemeModeSource + ?Sized> ThemeModeSource for &T {
    fn theme_mode(&self) -> ThemeMode {
        (**self).theme_mode()
    }
}
