use anyhow::Result;
use tesserae_styles::{
    assets::EmbeddedThemes,
    components::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Props, StyledComponent},
    theme::RootClasses,
    themes,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let themes = themes![EmbeddedThemes];
    let theme = themes.load("default")?;
    let table = tesserae_styles::init_with(&theme)?;

    println!("{}", table.to_css());

    // The host owns the mode; here it's read from the root element's classes.
    for root in [RootClasses("antialiased"), RootClasses("antialiased dark")] {
        let badge = Badge::render_themed(
            &Props::new()
                .variant(BadgeVariant::Destructive)
                .class("border-color:red")
                .attribute("role", "status"),
            table,
            root,
        )?;

        let button = Button::render_themed(
            &Props::new()
                .variant(ButtonVariant::Outline)
                .variant(ButtonSize::Small)
                .class("px-2"),
            table,
            root,
        )?;

        println!("{}", badge.to_html_open_tag());
        println!("{}", button.to_html_open_tag());
    }

    Ok(())
}
