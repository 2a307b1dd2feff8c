use crate::prelude::*;

#[cfg(feature = "render")]
fn assert_render_once<T: gpui::RenderOnce>() {}

fn assert_shareable<T: Send + Sync>() {}

#[cfg(feature = "render")]
#[test]
fn prelude_exports_the_button_element() {
    use gpui::IntoElement;

    assert_render_once::<Button>();
    let _ = Button::new("Save")
        .size(ButtonSize::Small)
        .variant(ButtonVariant::Ghost)
        .color(ButtonColor::Brand)
        .into_any_element();
}

#[test]
fn palette_and_resolver_are_thread_safe() {
    assert_shareable::<TokenPalette>();
    assert_shareable::<StyleResolver<'static>>();
    assert_shareable::<ResolvedStyle>();
    assert_shareable::<ConfigError>();
    assert_shareable::<PaletteError>();
}

#[test]
fn semantic_paths_are_stable_dotted_names() {
    let palette = TokenPalette::shared().expect("dds palette is valid");
    let paths = palette.paths().map(|(path, _)| path).collect::<Vec<_>>();
    assert_eq!(paths.len(), 94 + 9);
    assert!(paths.iter().any(|path| path == "static.blue"));
    assert!(paths.iter().any(|path| path == "background.accent"));
    assert!(paths.iter().any(|path| path == "text.disabled"));
    assert!(paths.iter().all(|path| path.contains('.')));
}

#[test]
fn crate_root_reexports_errors() {
    let error: crate::ConfigError = "huge".parse::<ButtonSize>().expect_err("not a size");
    assert!(matches!(error, ConfigError::InvalidOption { option: "size", .. }));
}
