//! Theme files and where to find them.

use cfg_if::cfg_if;

mod themes;
pub use themes::*;

cfg_if!(
    if #[cfg(feature = "builtin-theme")] {
        mod tesserae_themes;
        pub use tesserae_themes::*;
    }
);
