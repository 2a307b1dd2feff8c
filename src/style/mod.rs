use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::tokens::{BUTTON_PILL_RADIUS, ColorToken};

mod config;
mod resolve;

#[cfg(test)]
mod test_resolution_properties;

pub use config::ButtonPresets;
pub use resolve::{IconOnlySize, Padding, StyleResolver};

macro_rules! style_option {
    (
        $(#[$meta:meta])*
        $name:ident ($option:literal, default = $default:ident) {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
            pub const NAMES: &'static [&'static str] = &[$($label),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == value)
                    .ok_or_else(|| ConfigError::InvalidOption {
                        option: $option,
                        value: value.to_string(),
                        expected: Self::NAMES,
                    })
            }
        }
    };
}

style_option!(
    ButtonSize("size", default = Medium) {
        Large => "large",
        Medium => "medium",
        Small => "small",
        XSmall => "xsmall",
    }
);

style_option!(
    /// Structural treatment of the button, independent of its color.
    ButtonVariant("variant", default = Filled) {
        Filled => "filled",
        Outlined => "outlined",
        Ghost => "ghost",
    }
);

style_option!(
    /// Semantic hue of the button.
    ButtonColor("color", default = Accent) {
        Accent => "accent",
        Brand => "brand",
        Neutral => "neutral",
        Positive => "positive",
        Negative => "negative",
        Caution => "caution",
    }
);

/// Everything that decides how one button looks. Defaults: medium, filled,
/// accent, every flag off.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(try_from = "config::RawDimensions")]
pub struct StyleDimensions {
    pub size: ButtonSize,
    pub variant: ButtonVariant,
    pub color: ButtonColor,
    pub disabled: bool,
    pub loading: bool,
    pub icon_only: bool,
    pub full_width: bool,
}

impl StyleDimensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, value: ButtonSize) -> Self {
        self.size = value;
        self
    }

    pub fn variant(mut self, value: ButtonVariant) -> Self {
        self.variant = value;
        self
    }

    pub fn color(mut self, value: ButtonColor) -> Self {
        self.color = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn loading(mut self, value: bool) -> Self {
        self.loading = value;
        self
    }

    pub fn icon_only(mut self, value: bool) -> Self {
        self.icon_only = value;
        self
    }

    pub fn full_width(mut self, value: bool) -> Self {
        self.full_width = value;
        self
    }

    /// Loading buttons are disabled for every color decision.
    pub const fn is_effectively_disabled(&self) -> bool {
        self.disabled || self.loading
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cursor {
    Pointer,
    NotAllowed,
}

impl Cursor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::NotAllowed => "not-allowed",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Width {
    Intrinsic,
    Full,
}

impl Width {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intrinsic => "auto",
            Self::Full => "100%",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Radius {
    Pill,
    Fixed(f32),
}

impl Radius {
    pub const fn px(self) -> f32 {
        match self {
            Self::Pill => BUTTON_PILL_RADIUS,
            Self::Fixed(value) => value,
        }
    }
}

/// Translucent tints the renderer layers over the base background.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Overlay {
    Suppressed,
    Tint {
        hover: ColorToken,
        pressed: ColorToken,
    },
}

/// Flat attribute bag consumed verbatim by the renderer. Lengths are logical
/// pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub gap: f32,
    pub background_color: ColorToken,
    pub text_color: ColorToken,
    pub icon_color: ColorToken,
    pub border_color: ColorToken,
    pub border_width: f32,
    pub radius: Radius,
    pub cursor: Cursor,
    pub opacity: f32,
    pub width: Width,
    pub max_width: f32,
    pub font_size: f32,
    pub font_weight: u16,
    pub line_height: f32,
    pub overlay: Overlay,
}

impl ResolvedStyle {
    /// External variables, `--button-<size|state>-<property>`.
    pub fn variables(&self, dimensions: &StyleDimensions) -> StyleMap {
        let size = dimensions.size.as_str();
        let state = if dimensions.is_effectively_disabled() {
            "disabled"
        } else {
            "default"
        };
        let px = |value: f32| format!("{value}px");

        StyleMap::new()
            .token(
                format!("--button-{size}-padding-horizontal"),
                px(self.padding_horizontal),
            )
            .token(
                format!("--button-{size}-padding-vertical"),
                px(self.padding_vertical),
            )
            .token(format!("--button-{size}-gap"), px(self.gap))
            .token(format!("--button-{size}-font-size"), px(self.font_size))
            .token(
                format!("--button-{state}-background"),
                self.background_color.to_css(),
            )
            .token(format!("--button-{state}-text"), self.text_color.to_css())
            .token(format!("--button-{state}-icon"), self.icon_color.to_css())
            .token(
                format!("--button-{state}-border"),
                self.border_color.to_css(),
            )
            .token(format!("--button-{state}-radius"), px(self.radius.px()))
            .token(format!("--button-{state}-opacity"), self.opacity.to_string())
            .token(format!("--button-{state}-cursor"), self.cursor.as_str())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StyleMap {
    tokens: BTreeMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    pub fn read(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_parse_only_their_domain() {
        assert_eq!("xsmall".parse(), Ok(ButtonSize::XSmall));
        assert_eq!("ghost".parse(), Ok(ButtonVariant::Ghost));
        assert_eq!("caution".parse(), Ok(ButtonColor::Caution));
        assert_eq!(
            "purple".parse::<ButtonColor>(),
            Err(ConfigError::InvalidOption {
                option: "color",
                value: "purple".to_string(),
                expected: ButtonColor::NAMES,
            })
        );
        assert!("Large".parse::<ButtonSize>().is_err());
    }

    #[test]
    fn defaults_are_declared_once() {
        let dimensions = StyleDimensions::new();
        assert_eq!(dimensions.size, ButtonSize::Medium);
        assert_eq!(dimensions.variant, ButtonVariant::Filled);
        assert_eq!(dimensions.color, ButtonColor::Accent);
        assert!(!dimensions.disabled && !dimensions.loading);
        assert!(!dimensions.icon_only && !dimensions.full_width);
    }

    #[test]
    fn loading_folds_into_effective_disabled() {
        assert!(!StyleDimensions::new().is_effectively_disabled());
        assert!(StyleDimensions::new().loading(true).is_effectively_disabled());
        assert!(StyleDimensions::new().disabled(true).is_effectively_disabled());
    }

    #[test]
    fn style_map_later_token_replaces_earlier() {
        let map = StyleMap::new()
            .token("--a", "1")
            .token("--b", "2")
            .token("--b", "3");
        assert_eq!(map.read("--a"), Some("1"));
        assert_eq!(map.read("--b"), Some("3"));
        assert_eq!(map.len(), 2);
        assert!(StyleMap::new().is_empty());
    }
}
