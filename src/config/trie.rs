//! Trie configuration module.
//!
//! Settings applied to tries built from a loaded configuration.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::{LanaiTrieConfig, DEFAULT_STACK_CAPACITY};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieSettings {
    /// Longest key accepted by `add`, in bytes (None for unlimited)
    pub max_key_len: Option<usize>,

    /// Initial capacity of traversal stacks
    pub stack_capacity: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            max_key_len: None,
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_len == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_key_len".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        if self.stack_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.stack_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl From<&TrieSettings> for LanaiTrieConfig {
    fn from(settings: &TrieSettings) -> Self {
        let config = LanaiTrieConfig::new().with_stack_capacity(settings.stack_capacity.max(1));
        match settings.max_key_len {
            Some(max_len) if max_len > 0 => config.with_max_key_len(max_len),
            _ => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TrieSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_values_are_rejected() {
        let settings = TrieSettings {
            max_key_len: Some(0),
            ..TrieSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));

        let settings = TrieSettings {
            stack_capacity: 0,
            ..TrieSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_conversion_to_trie_config() {
        let settings = TrieSettings {
            max_key_len: Some(256),
            stack_capacity: 64,
        };
        let config = LanaiTrieConfig::from(&settings);

        assert_eq!(config.max_key_len(), Some(256));
        assert_eq!(config.stack_capacity(), 64);
        assert_eq!(
            LanaiTrieConfig::from(&TrieSettings::default()),
            LanaiTrieConfig::default()
        );
    }
}
