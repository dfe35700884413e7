//! Design tokens and the two-scope token table.
//!
//! Tokens hold a root (light) value and an optional dark-mode override.
//! The table is filled once at startup and only read afterwards; switching
//! the theme mode changes which scope is read, never the table itself.

mod error;
pub use error::*;

mod value;
pub use value::*;

mod token;
pub use token::*;

mod mode;
pub use mode::*;

mod table;
pub use table::*;

mod global;
pub use global::*;

pub mod deserializers;
