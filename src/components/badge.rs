use std::sync::LazyLock;

use tesserae_macros::IntoVariantOption;

use crate::{
    components::StyledComponent,
    variants::{VariantSpec, Variants},
};

/// Emphasis of a [`Badge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, IntoVariantOption)]
#[axis("variant")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

static BADGE_VARIANTS: LazyLock<Variants> = LazyLock::new(|| {
    Variants::new(
        "bg-neutral-800 text-card-foreground inline-flex rounded-full border-neutral-600 px-4 py-1",
    )
    .with_axis(
        VariantSpec::new(
            "variant",
            [
                (
                    "default",
                    "bg-neutral-800 text-card-foreground inline-flex rounded-full border border-neutral-700 px-4 py-1",
                ),
                (
                    "secondary",
                    "bg-card text-card-foreground inline-flex rounded-full border border-neutral-600 px-4 py-1",
                ),
                (
                    "destructive",
                    "bg-red-200 text-red-800 border border-red-900 inline-flex rounded-full px-4 py-1",
                ),
                (
                    "outline",
                    "bg-transparent text-card-foreground border border-white inline-flex rounded-full px-4 py-1",
                ),
            ],
            "default",
        )
        .unwrap(),
    )
    .unwrap()
});

/// A small pill shaped label.
pub struct Badge;

impl StyledComponent for Badge {
    const TAG: &'static str = "div";

    fn variants() -> &'static Variants {
        &BADGE_VARIANTS
    }
}
