//! Variant and theme token resolution for utility-class styled components.
//!
//! A component declares its classes as a base plus independent variant
//! axes. Rendering resolves the selected options, merges caller classes
//! over them per utility group and, when asked, resolves the design tokens
//! the final classes read for the current theme mode.
//!
//! ```
//! use tesserae_styles::{
//!     components::{Badge, BadgeVariant, Props, StyledComponent},
//!     theme::{Theme, ThemeMode},
//! };
//!
//! let table = Theme::DEFAULT.to_table()?;
//! let props = Props::new().variant(BadgeVariant::Secondary).class("px-2");
//! let badge = Badge::render_themed(&props, &table, ThemeMode::Dark)?;
//!
//! assert!(badge.class_name().contains("bg-card"));
//! assert_eq!(badge.style_vars.unwrap()["--card"], "232 52% 8%");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

extern crate self as tesserae_styles;

pub mod components;

pub mod theme;

pub mod variants;

pub mod merge;

pub mod utils;
pub use utils::ClassList;

pub mod assets;

mod error;
pub use error::*;

mod init;
pub use init::*;

pub use tesserae_macros::IntoVariantOption;
