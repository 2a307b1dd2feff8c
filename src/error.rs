use thiserror::Error;

/// A style option that falls outside its enumerated domain, or a
/// configuration document that could not be read.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("invalid {option} `{value}`, expected one of: {}", expected.join(", "))]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static [&'static str],
    },
    #[error("malformed button configuration: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        Self::Parse(error.message().to_string())
    }
}

/// Palette integrity failures. These only surface while a palette is being
/// built; a built palette never fails a lookup.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PaletteError {
    #[error("token `{from}` references undefined token `{to}`")]
    Dangling { from: String, to: String },
    #[error("token `{from}` ({from_rank}) may not reference `{to}` ({to_rank})")]
    RankViolation {
        from: String,
        from_rank: &'static str,
        to: String,
        to_rank: &'static str,
    },
    #[error("token reference cycle: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },
    #[error("declared token `{0}` has no definition")]
    Missing(String),
    #[error("token `{path}` has invalid color literal `{literal}`")]
    InvalidLiteral { path: String, literal: String },
}
