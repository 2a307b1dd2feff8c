#[cfg(feature = "render")]
pub use crate::components::Button;
pub use crate::contracts::{Colorable, Disableable, Sizeable, Variantable};
pub use crate::error::{ConfigError, PaletteError};
pub use crate::style::{
    ButtonColor, ButtonPresets, ButtonSize, ButtonVariant, ResolvedStyle, StyleDimensions,
    StyleResolver,
};
pub use crate::theme::{PaletteDefinition, TokenPalette};
pub use crate::tokens::ColorToken;
