use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Output formats supported by the daemon's tracing subscriber.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event, with fields flattened.
    #[default]
    Json,
    /// Single-line human-readable output for interactive debugging.
    Compact,
}

/// Error returned when a [`LogFormat`] name is not recognised.
pub type LogFormatParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(LogFormat::from_str("JSON").ok(), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_str("compact").ok(), Some(LogFormat::Compact));
        assert!(LogFormat::from_str("pretty").is_err());
    }
}
