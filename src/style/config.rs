use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use super::StyleDimensions;
use crate::error::ConfigError;

/// Wire shape of [`StyleDimensions`]; option values stay strings until they
/// are checked against their domain.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RawDimensions {
    size: Option<String>,
    variant: Option<String>,
    color: Option<String>,
    disabled: bool,
    loading: bool,
    icon_only: bool,
    full_width: bool,
}

impl TryFrom<RawDimensions> for StyleDimensions {
    type Error = ConfigError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        Ok(Self {
            size: raw
                .size
                .as_deref()
                .map_or(Ok(defaults.size), |value| value.parse())?,
            variant: raw
                .variant
                .as_deref()
                .map_or(Ok(defaults.variant), |value| value.parse())?,
            color: raw
                .color
                .as_deref()
                .map_or(Ok(defaults.color), |value| value.parse())?,
            disabled: raw.disabled,
            loading: raw.loading,
            icon_only: raw.icon_only,
            full_width: raw.full_width,
        })
    }
}

impl StyleDimensions {
    /// Reads one button's options from a TOML table:
    ///
    /// ```toml
    /// size = "large"
    /// variant = "outlined"
    /// color = "negative"
    /// fullWidth = true
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawDimensions = toml::from_str(source).inspect_err(|error| {
            warn!(error = %error.message(), "rejected button configuration");
        })?;
        Self::try_from(raw).inspect_err(|error| {
            warn!(%error, "rejected button configuration");
        })
    }
}

/// Named button configurations read from a `[presets.<name>]` document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ButtonPresets {
    presets: BTreeMap<String, StyleDimensions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawPresets {
    presets: BTreeMap<String, RawDimensions>,
}

impl ButtonPresets {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawPresets = toml::from_str(source).inspect_err(|error| {
            warn!(error = %error.message(), "rejected button presets");
        })?;
        let presets = raw
            .presets
            .into_iter()
            .map(|(name, dimensions)| {
                StyleDimensions::try_from(dimensions)
                    .inspect_err(|error| warn!(preset = %name, %error, "rejected button preset"))
                    .map(|dimensions| (name, dimensions))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { presets })
    }

    pub fn get(&self, name: &str) -> Option<StyleDimensions> {
        self.presets.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
