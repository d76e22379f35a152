//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logger::Resolution;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Clock settings.
    pub clock: ClockConfig,
}

/// Clock configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClockConfig {
    /// `seconds` (default) or `sub_second`.
    pub resolution: Resolution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: LoggerConfig = toml::from_str("").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.clock.resolution, Resolution::Seconds);
    }

    #[test]
    fn test_sub_second_resolution() {
        let config: LoggerConfig =
            toml::from_str("[clock]\nresolution = \"sub_second\"\n").unwrap();
        assert_eq!(config.clock.resolution, Resolution::SubSecond);
    }

    #[test]
    fn test_unknown_resolution_rejected() {
        let result = toml::from_str::<LoggerConfig>("[clock]\nresolution = \"minutes\"\n");
        assert!(result.is_err());
    }
}
