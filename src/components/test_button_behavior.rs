use super::*;
use crate::contracts::{Colorable, Disableable, Sizeable, Variantable};
use crate::style::{
    ButtonColor, ButtonPresets, ButtonSize, ButtonVariant, Overlay, StyleDimensions, StyleResolver,
};
use crate::theme::{PaletteDefinition, TokenPalette};
use crate::tokens::CoreHue;
use gpui::{AnyElement, IntoElement, SharedString, div};
use std::sync::Arc;

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

fn exercise_disableable<T, F>(mut make: F)
where
    T: Disableable + IntoElement,
    F: FnMut() -> T,
{
    let _ = into_any(make().disabled(false));
    let _ = into_any(make().disabled(true));
}

#[test]
fn every_option_combination_builds_an_element() {
    for size in ButtonSize::ALL.iter().copied() {
        for variant in ButtonVariant::ALL.iter().copied() {
            for color in ButtonColor::ALL.iter().copied() {
                let _ = into_any(
                    Button::new("Save")
                        .size(size)
                        .variant(variant)
                        .color(color)
                        .left_slot(div())
                        .right_slot(div()),
                );
                let _ = into_any(
                    Button::without_label()
                        .size(size)
                        .variant(variant)
                        .color(color)
                        .icon_only(true)
                        .left_slot(div()),
                );
            }
        }
    }
    exercise_disableable(|| Button::new("Delete").color(ButtonColor::Negative));
}

#[test]
fn button_paints_exactly_what_the_resolver_returns() {
    let button = Button::new("Continue")
        .size(ButtonSize::Large)
        .variant(ButtonVariant::Outlined)
        .color(ButtonColor::Negative)
        .full_width(true);
    let expected = StyleResolver::shared()
        .expect("dds palette is valid")
        .resolve(&button.style_dimensions());
    assert_eq!(button.resolved_style(), Ok(expected));
}

#[test]
fn custom_palette_is_used_for_resolution() {
    let definition = PaletteDefinition::dds().with_core_step(CoreHue::Blue, 50, "#102030");
    let palette = Arc::new(TokenPalette::build(&definition).expect("override stays valid"));

    let first = Button::new("Go").palette(Arc::clone(&palette));
    let second = Button::new("Stop").palette(Arc::clone(&palette));
    for button in [&first, &second] {
        let style = button.resolved_style().expect("palette supplied");
        assert_eq!(style.background_color.to_css(), "#102030");
    }
    assert_eq!(Arc::strong_count(&palette), 3);

    drop((first, second));
    assert_eq!(Arc::strong_count(&palette), 1);

    let owned = Button::new("Owned").palette(
        TokenPalette::build(&definition).expect("override stays valid"),
    );
    assert_eq!(
        owned.resolved_style().map(|style| style.background_color.to_css()),
        Ok("#102030".to_string())
    );
}

#[test]
fn disabled_and_loading_buttons_do_not_wire_clicks() {
    let enabled = Button::new("Send").on_click(|_, _, _| {});
    assert!(enabled.is_interactive());

    let disabled = Button::new("Send").on_click(|_, _, _| {}).disabled(true);
    assert!(!disabled.is_interactive());
    assert_eq!(
        disabled.resolved_style().map(|style| style.overlay),
        Ok(Overlay::Suppressed)
    );

    let loading = Button::new("Send").on_click(|_, _, _| {}).loading(true);
    assert!(!loading.is_interactive());

    assert!(!Button::new("No handler").is_interactive());
}

#[test]
fn loading_replaces_content_with_the_loading_label() {
    let button = Button::new("Upload").loading(true);
    assert_eq!(
        button.visible_label(),
        Some(SharedString::from("Loading..."))
    );

    let custom = Button::new("Upload").loading(true).loading_label("Uploading");
    assert_eq!(custom.visible_label(), Some(SharedString::from("Uploading")));
    let _ = into_any(custom);
}

#[test]
fn icon_only_hides_the_label() {
    let button = Button::new("Settings").icon_only(true).left_slot(div());
    assert_eq!(button.visible_label(), None);
    assert_eq!(
        Button::new("Settings").visible_label(),
        Some(SharedString::from("Settings"))
    );
}

#[test]
fn presets_configure_buttons() {
    let presets = ButtonPresets::from_toml_str(
        r#"
        [presets.danger]
        variant = "outlined"
        color = "negative"
        "#,
    )
    .expect("valid presets");
    let dimensions = presets.get("danger").expect("danger preset");
    let button = Button::new("Remove").dimensions(dimensions);
    assert_eq!(button.style_dimensions(), dimensions);
    assert_eq!(
        button.style_dimensions(),
        StyleDimensions::new()
            .variant(ButtonVariant::Outlined)
            .color(ButtonColor::Negative)
    );
}

#[test]
fn explicit_ids_override_callsite_ids() {
    let button = Button::new("Save").with_id("toolbar-save");
    assert_eq!(button.id().as_str(), "toolbar-save");
    assert!(Button::new("Save").id().as_str().starts_with("button-"));
}
