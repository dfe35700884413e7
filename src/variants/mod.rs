//! Variant axes and their resolution into class lists.

mod axis;
pub use axis::*;

mod selections;
pub use selections::*;

mod resolve;
pub use resolve::*;

/// A fieldless enum naming the options of one axis.
///
/// Usually derived with `#[derive(IntoVariantOption)]`.
pub trait VariantOption: Sized + 'static {
    /// The axis the options belong to.
    const AXIS: &'static str;
    /// Every option, in declaration order.
    const ALL: &'static [Self];

    fn option(&self) -> &'static str;
}
