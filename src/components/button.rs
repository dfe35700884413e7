use std::sync::LazyLock;

use tesserae_macros::IntoVariantOption;

use crate::{
    components::StyledComponent,
    variants::{VariantSpec, Variants},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, IntoVariantOption)]
#[axis("variant")]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Highlight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, IntoVariantOption)]
#[axis("size")]
pub enum ButtonSize {
    #[default]
    Default,
    #[option("sm")]
    Small,
    #[option("lg")]
    Large,
    Icon,
}

static BUTTON_VARIANTS: LazyLock<Variants> = LazyLock::new(|| {
    Variants::new(
        "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:ring-2 focus-visible:ring-ring",
    )
    .with_axis(
        VariantSpec::new(
            "variant",
            [
                ("default", "bg-primary text-primary-foreground hover:bg-primary-hover active:hover:bg-primary-active-hover"),
                ("secondary", "bg-secondary text-secondary-foreground hover:bg-muted"),
                ("destructive", "bg-destructive text-destructive-foreground"),
                ("outline", "border border-input bg-background hover:bg-accent hover:text-accent-foreground"),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                ("highlight", "bg-highlight text-foreground"),
            ],
            "default",
        )
        .unwrap(),
    )
    .unwrap()
    .with_axis(
        VariantSpec::new(
            "size",
            [
                ("default", "h-9 px-4 py-2"),
                ("sm", "h-8 rounded-sm px-3 text-xs"),
                ("lg", "h-10 rounded-lg px-8"),
                ("icon", "h-9 w-9"),
            ],
            "default",
        )
        .unwrap(),
    )
    .unwrap()
});

pub struct Button;

impl StyledComponent for Button {
    const TAG: &'static str = "button";

    fn variants() -> &'static Variants {
        &BUTTON_VARIANTS
    }
}
