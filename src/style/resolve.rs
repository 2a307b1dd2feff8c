use crate::error::{ConfigError, PaletteError};
use crate::theme::{BackgroundToken, BorderToken, ContentToken, Hue, Tone, TokenPalette};
use crate::tokens::{
    AlphaHue, BUTTON_BORDER_WIDTH, BUTTON_FONT_WEIGHT, BUTTON_GHOST_RADIUS, BUTTON_LINE_HEIGHT,
    BUTTON_MAX_WIDTH, ColorToken, DISABLED_OPACITY, PaletteCatalog,
};

use super::{
    ButtonColor, ButtonSize, ButtonVariant, Cursor, Overlay, Radius, ResolvedStyle,
    StyleDimensions, Width,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Padding {
    pub const fn new(vertical: f32, horizontal: f32) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }
}

/// Rows of the icon-only padding table. There is no `xsmall` row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IconOnlySize {
    Large,
    Medium,
    Small,
}

impl ButtonSize {
    /// `xsmall` icon-only buttons use the `small` row.
    pub const fn icon_only_size(self) -> IconOnlySize {
        match self {
            Self::Large => IconOnlySize::Large,
            Self::Medium => IconOnlySize::Medium,
            Self::Small | Self::XSmall => IconOnlySize::Small,
        }
    }

    const fn standard_padding(self) -> Padding {
        match self {
            Self::Large => Padding::new(14.0, 24.0),
            Self::Medium => Padding::new(12.0, 20.0),
            Self::Small => Padding::new(8.0, 16.0),
            Self::XSmall => Padding::new(6.0, 12.0),
        }
    }

    const fn ghost_padding(self) -> Padding {
        match self {
            Self::Large => Padding::new(10.0, 12.0),
            Self::Medium => Padding::new(8.0, 10.0),
            Self::Small => Padding::new(6.0, 8.0),
            Self::XSmall => Padding::new(4.0, 6.0),
        }
    }

    const fn gap(self) -> f32 {
        match self {
            Self::Large => 8.0,
            Self::Medium => 6.0,
            Self::Small | Self::XSmall => 4.0,
        }
    }

    const fn font_size(self) -> f32 {
        match self {
            Self::Large => 18.0,
            Self::Medium => 16.0,
            Self::Small | Self::XSmall => 14.0,
        }
    }
}

impl IconOnlySize {
    const fn padding(self, variant: ButtonVariant) -> Padding {
        let value = match (variant, self) {
            (ButtonVariant::Ghost, Self::Large) => 10.0,
            (ButtonVariant::Ghost, Self::Medium) => 8.0,
            (ButtonVariant::Ghost, Self::Small) => 6.0,
            (ButtonVariant::Filled | ButtonVariant::Outlined, Self::Large) => 14.0,
            (ButtonVariant::Filled | ButtonVariant::Outlined, Self::Medium) => 12.0,
            (ButtonVariant::Filled | ButtonVariant::Outlined, Self::Small) => 8.0,
        };
        Padding::uniform(value)
    }
}

/// Semantic tokens one color/variant cell paints with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ColorCell {
    Filled {
        background: BackgroundToken,
        content: ContentToken,
    },
    Outlined {
        border: BorderToken,
        content: ContentToken,
    },
    Ghost {
        content: ContentToken,
    },
}

fn color_cell(color: ButtonColor, variant: ButtonVariant) -> ColorCell {
    use ButtonColor as C;
    use ButtonVariant as V;

    let background = |hue| BackgroundToken::Tinted(hue, Tone::Base);
    let border = |hue| BorderToken::Tinted(hue, Tone::Base);
    let content = |hue| ContentToken::Tinted(hue, Tone::Base);

    match (color, variant) {
        (C::Accent, V::Filled) => ColorCell::Filled {
            background: background(Hue::Accent),
            content: ContentToken::Invert,
        },
        (C::Accent, V::Outlined) => ColorCell::Outlined {
            border: border(Hue::Accent),
            content: content(Hue::Accent),
        },
        (C::Accent, V::Ghost) => ColorCell::Ghost {
            content: content(Hue::Accent),
        },
        (C::Brand, V::Filled) => ColorCell::Filled {
            background: background(Hue::Brand),
            content: ContentToken::Invert,
        },
        (C::Brand, V::Outlined) => ColorCell::Outlined {
            border: border(Hue::Brand),
            content: content(Hue::Brand),
        },
        (C::Brand, V::Ghost) => ColorCell::Ghost {
            content: content(Hue::Brand),
        },
        (C::Neutral, V::Filled) => ColorCell::Filled {
            background: BackgroundToken::Invert,
            content: ContentToken::Invert,
        },
        (C::Neutral, V::Outlined) => ColorCell::Outlined {
            border: BorderToken::Default,
            content: ContentToken::Primary,
        },
        (C::Neutral, V::Ghost) => ColorCell::Ghost {
            content: ContentToken::Primary,
        },
        (C::Positive, V::Filled) => ColorCell::Filled {
            background: background(Hue::Positive),
            content: ContentToken::Invert,
        },
        (C::Positive, V::Outlined) => ColorCell::Outlined {
            border: border(Hue::Positive),
            content: content(Hue::Positive),
        },
        (C::Positive, V::Ghost) => ColorCell::Ghost {
            content: content(Hue::Positive),
        },
        (C::Negative, V::Filled) => ColorCell::Filled {
            background: background(Hue::Negative),
            content: ContentToken::Invert,
        },
        (C::Negative, V::Outlined) => ColorCell::Outlined {
            border: border(Hue::Negative),
            content: content(Hue::Negative),
        },
        (C::Negative, V::Ghost) => ColorCell::Ghost {
            content: content(Hue::Negative),
        },
        // Caution keeps primary text on its yellow fill.
        (C::Caution, V::Filled) => ColorCell::Filled {
            background: background(Hue::Caution),
            content: ContentToken::Primary,
        },
        (C::Caution, V::Outlined) => ColorCell::Outlined {
            border: border(Hue::Caution),
            content: content(Hue::Caution),
        },
        (C::Caution, V::Ghost) => ColorCell::Ghost {
            content: content(Hue::Caution),
        },
    }
}

struct Paint {
    background: ColorToken,
    text: ColorToken,
    icon: ColorToken,
    border: ColorToken,
}

/// Maps [`StyleDimensions`] onto a [`ResolvedStyle`] against one palette.
#[derive(Clone, Copy, Debug)]
pub struct StyleResolver<'a> {
    palette: &'a TokenPalette,
}

impl<'a> StyleResolver<'a> {
    pub fn new(palette: &'a TokenPalette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &'a TokenPalette {
        self.palette
    }

    pub fn resolve(&self, dimensions: &StyleDimensions) -> ResolvedStyle {
        let disabled = dimensions.is_effectively_disabled();
        let variant = dimensions.variant;

        let padding = if dimensions.icon_only {
            dimensions.size.icon_only_size().padding(variant)
        } else if variant == ButtonVariant::Ghost {
            dimensions.size.ghost_padding()
        } else {
            dimensions.size.standard_padding()
        };

        let paint = if disabled {
            self.disabled_paint(variant)
        } else {
            self.paint(color_cell(dimensions.color, variant))
        };

        let overlay = match (disabled, variant) {
            (true, _) => Overlay::Suppressed,
            (false, ButtonVariant::Filled) => Overlay::Tint {
                hover: PaletteCatalog::alpha(AlphaHue::White, 12),
                pressed: PaletteCatalog::alpha(AlphaHue::Black, 12),
            },
            (false, ButtonVariant::Outlined | ButtonVariant::Ghost) => Overlay::Tint {
                hover: PaletteCatalog::alpha(AlphaHue::Gray, 8),
                pressed: PaletteCatalog::alpha(AlphaHue::Gray, 12),
            },
        };

        ResolvedStyle {
            padding_horizontal: padding.horizontal,
            padding_vertical: padding.vertical,
            gap: dimensions.size.gap(),
            background_color: paint.background,
            text_color: paint.text,
            icon_color: paint.icon,
            border_color: paint.border,
            border_width: match variant {
                ButtonVariant::Outlined => BUTTON_BORDER_WIDTH,
                ButtonVariant::Filled | ButtonVariant::Ghost => 0.0,
            },
            radius: match variant {
                ButtonVariant::Ghost => Radius::Fixed(BUTTON_GHOST_RADIUS),
                ButtonVariant::Filled | ButtonVariant::Outlined => Radius::Pill,
            },
            cursor: if disabled {
                Cursor::NotAllowed
            } else {
                Cursor::Pointer
            },
            opacity: if disabled { DISABLED_OPACITY } else { 1.0 },
            width: if dimensions.full_width {
                Width::Full
            } else {
                Width::Intrinsic
            },
            max_width: BUTTON_MAX_WIDTH,
            font_size: dimensions.size.font_size(),
            font_weight: BUTTON_FONT_WEIGHT,
            line_height: BUTTON_LINE_HEIGHT,
            overlay,
        }
    }

    /// Parses a TOML option table and resolves it. Out-of-domain options are
    /// returned as errors.
    pub fn resolve_toml(&self, source: &str) -> Result<ResolvedStyle, ConfigError> {
        StyleDimensions::from_toml_str(source).map(|dimensions| self.resolve(&dimensions))
    }

    fn paint(&self, cell: ColorCell) -> Paint {
        let palette = self.palette;
        match cell {
            ColorCell::Filled {
                background,
                content,
            } => Paint {
                background: palette.background(background),
                text: palette.text(content),
                icon: palette.icon(content),
                border: ColorToken::TRANSPARENT,
            },
            ColorCell::Outlined { border, content } => Paint {
                background: ColorToken::TRANSPARENT,
                text: palette.text(content),
                icon: palette.icon(content),
                border: palette.border(border),
            },
            ColorCell::Ghost { content } => Paint {
                background: ColorToken::TRANSPARENT,
                text: palette.text(content),
                icon: palette.icon(content),
                border: ColorToken::TRANSPARENT,
            },
        }
    }

    fn disabled_paint(&self, variant: ButtonVariant) -> Paint {
        let palette = self.palette;
        Paint {
            background: match variant {
                ButtonVariant::Filled => palette.background(BackgroundToken::Disabled),
                ButtonVariant::Outlined | ButtonVariant::Ghost => ColorToken::TRANSPARENT,
            },
            text: palette.text(ContentToken::Disabled),
            icon: palette.icon(ContentToken::Disabled),
            border: match variant {
                ButtonVariant::Outlined => palette.border(BorderToken::Disabled),
                ButtonVariant::Filled | ButtonVariant::Ghost => ColorToken::TRANSPARENT,
            },
        }
    }
}

impl StyleResolver<'static> {
    /// Resolver over the process-wide DDS palette.
    pub fn shared() -> Result<Self, PaletteError> {
        TokenPalette::shared().map(Self::new)
    }
}
