use super::*;
use crate::theme::{BackgroundToken, BorderToken, ContentToken, Hue, Tone, TokenPalette};

const FLAGS: [bool; 2] = [false, true];

fn every_dimension() -> Vec<StyleDimensions> {
    let mut all = Vec::new();
    for size in ButtonSize::ALL.iter().copied() {
        for variant in ButtonVariant::ALL.iter().copied() {
            for color in ButtonColor::ALL.iter().copied() {
                for disabled in FLAGS {
                    for loading in FLAGS {
                        for icon_only in FLAGS {
                            for full_width in FLAGS {
                                all.push(StyleDimensions {
                                    size,
                                    variant,
                                    color,
                                    disabled,
                                    loading,
                                    icon_only,
                                    full_width,
                                });
                            }
                        }
                    }
                }
            }
        }
    }
    all
}

fn palette() -> &'static TokenPalette {
    TokenPalette::shared().expect("dds palette is valid")
}

fn hue(color: ButtonColor) -> Option<Hue> {
    match color {
        ButtonColor::Accent => Some(Hue::Accent),
        ButtonColor::Brand => Some(Hue::Brand),
        ButtonColor::Positive => Some(Hue::Positive),
        ButtonColor::Negative => Some(Hue::Negative),
        ButtonColor::Caution => Some(Hue::Caution),
        ButtonColor::Neutral => None,
    }
}

#[test]
fn resolution_is_total_over_the_configuration_space() {
    let resolver = StyleResolver::new(palette());
    let all = every_dimension();
    assert_eq!(all.len(), 576 * 2);

    for dimensions in &all {
        let style = resolver.resolve(dimensions);
        assert!(style.padding_horizontal > 0.0, "{dimensions:?}");
        assert!(style.padding_vertical > 0.0, "{dimensions:?}");
        assert!(style.gap > 0.0, "{dimensions:?}");
        assert!(style.font_size > 0.0, "{dimensions:?}");
        assert!(style.radius.px() > 0.0, "{dimensions:?}");
        assert!(style.opacity > 0.0 && style.opacity <= 1.0, "{dimensions:?}");
        assert!(!style.text_color.is_transparent(), "{dimensions:?}");
        assert!(!style.icon_color.is_transparent(), "{dimensions:?}");
        assert_eq!(
            style.width == Width::Full,
            dimensions.full_width,
            "{dimensions:?}"
        );
    }
}

#[test]
fn effective_disabled_dominates_every_color() {
    let palette = palette();
    let resolver = StyleResolver::new(palette);

    for dimensions in every_dimension()
        .iter()
        .filter(|dimensions| dimensions.is_effectively_disabled())
    {
        let style = resolver.resolve(dimensions);
        let expected_background = match dimensions.variant {
            ButtonVariant::Filled => palette.background(BackgroundToken::Disabled),
            _ => ColorToken::TRANSPARENT,
        };
        let expected_border = match dimensions.variant {
            ButtonVariant::Outlined => palette.border(BorderToken::Disabled),
            _ => ColorToken::TRANSPARENT,
        };
        assert_eq!(style.background_color, expected_background, "{dimensions:?}");
        assert_eq!(style.border_color, expected_border, "{dimensions:?}");
        assert_eq!(
            style.text_color,
            palette.text(ContentToken::Disabled),
            "{dimensions:?}"
        );
        assert_eq!(
            style.icon_color,
            palette.icon(ContentToken::Disabled),
            "{dimensions:?}"
        );
        assert_eq!(style.cursor, Cursor::NotAllowed);
        assert_eq!(style.opacity, crate::tokens::DISABLED_OPACITY);
        assert_eq!(style.overlay, Overlay::Suppressed);
    }
}

#[test]
fn enabled_buttons_always_offer_an_overlay() {
    let resolver = StyleResolver::new(palette());
    for dimensions in every_dimension()
        .iter()
        .filter(|dimensions| !dimensions.is_effectively_disabled())
    {
        let style = resolver.resolve(dimensions);
        assert!(
            matches!(style.overlay, Overlay::Tint { .. }),
            "{dimensions:?}"
        );
        assert_eq!(style.cursor, Cursor::Pointer);
        assert_eq!(style.opacity, 1.0);
    }
}

#[test]
fn ghost_is_transparent_for_every_color() {
    let resolver = StyleResolver::new(palette());
    for color in ButtonColor::ALL.iter().copied() {
        let style = resolver.resolve(
            &StyleDimensions::new()
                .variant(ButtonVariant::Ghost)
                .color(color),
        );
        assert_eq!(style.background_color, ColorToken::TRANSPARENT, "{color}");
        assert_eq!(style.border_color, ColorToken::TRANSPARENT, "{color}");
        assert_eq!(style.border_width, 0.0);
    }
}

#[test]
fn filled_paints_background_with_contrasting_text() {
    let palette = palette();
    let resolver = StyleResolver::new(palette);
    for color in ButtonColor::ALL.iter().copied() {
        let style = resolver.resolve(&StyleDimensions::new().color(color));
        let background = match hue(color) {
            Some(hue) => palette.background(BackgroundToken::Tinted(hue, Tone::Base)),
            None => palette.background(BackgroundToken::Invert),
        };
        let text = match color {
            ButtonColor::Caution => palette.text(ContentToken::Primary),
            _ => palette.text(ContentToken::Invert),
        };
        assert_eq!(style.background_color, background, "{color}");
        assert_eq!(style.text_color, text, "{color}");
        assert_ne!(style.background_color, style.text_color, "{color}");
        assert_eq!(style.border_color, ColorToken::TRANSPARENT, "{color}");
    }
}

#[test]
fn outlined_paints_border_and_text_in_the_same_hue() {
    let palette = palette();
    let resolver = StyleResolver::new(palette);
    for color in ButtonColor::ALL.iter().copied() {
        let style = resolver.resolve(
            &StyleDimensions::new()
                .variant(ButtonVariant::Outlined)
                .color(color),
        );
        assert_eq!(style.background_color, ColorToken::TRANSPARENT, "{color}");
        assert!(!style.border_color.is_transparent(), "{color}");
        if let Some(hue) = hue(color) {
            assert_eq!(
                style.border_color,
                palette.border(BorderToken::Tinted(hue, Tone::Base))
            );
            assert_eq!(
                style.text_color,
                palette.text(ContentToken::Tinted(hue, Tone::Base))
            );
        }
    }
}

#[test]
fn resolution_is_pure() {
    let resolver = StyleResolver::new(palette());
    for dimensions in every_dimension() {
        assert_eq!(resolver.resolve(&dimensions), resolver.resolve(&dimensions));
    }
}

#[test]
fn resolution_is_shareable_across_threads() {
    let dimensions = every_dimension();
    let expected = dimensions
        .iter()
        .map(|dimensions| StyleResolver::new(palette()).resolve(dimensions))
        .collect::<Vec<_>>();

    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let resolver = StyleResolver::shared().expect("dds palette is valid");
                    dimensions
                        .iter()
                        .map(|dimensions| resolver.resolve(dimensions))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().expect("resolver thread"), expected);
        }
    });
}
