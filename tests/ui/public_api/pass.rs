use dds_button::prelude::*;
use dds_button::theme::{BackgroundToken, ContentToken};

fn main() {
    let palette = TokenPalette::shared().expect("dds palette");
    let resolver = StyleResolver::new(palette);

    let dimensions = StyleDimensions::new()
        .size(ButtonSize::Large)
        .variant(ButtonVariant::Outlined)
        .color(ButtonColor::Negative);
    let style = resolver.resolve(&dimensions);
    assert_eq!(style.background_color, ColorToken::TRANSPARENT);
    assert_eq!(style.padding_horizontal, 24.0);

    let disabled = resolver.resolve(&dimensions.disabled(true));
    assert_eq!(disabled.text_color, palette.text(ContentToken::Disabled));

    let filled = resolver
        .resolve_toml("color = \"positive\"")
        .expect("valid configuration");
    assert_ne!(filled.background_color, palette.background(BackgroundToken::Disabled));

    let variables = style.variables(&dimensions);
    assert_eq!(variables.read("--button-large-gap"), Some("8px"));

    let rejected = StyleDimensions::from_toml_str("size = \"huge\"");
    assert!(matches!(rejected, Err(ConfigError::InvalidOption { .. })));
}
