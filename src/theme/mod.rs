//! Theme files, theme mode sources and the mapping from tokens to classes.
//!
//! Token values live in the two-scope table of `tesserae_theme`. Classes
//! only ever name a token, so resolving variants never depends on the
//! active theme mode.

mod schema;
pub use schema::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

pub use tesserae_theme::{
    Dimension, HslColor, LengthUnit, ThemeMode, Token, TokenEntry, TokenError, TokenTable,
    TokenValue, custom_property, install, installed,
};
