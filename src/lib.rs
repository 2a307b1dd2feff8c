#[cfg(feature = "render")]
pub mod components;
pub mod contracts;
pub mod error;
pub mod id;
pub mod prelude;
pub mod style;
pub mod theme;
pub mod tokens;

pub use error::{ConfigError, PaletteError};

#[cfg(test)]
mod test_public_api;
