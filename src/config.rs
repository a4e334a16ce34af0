// src/config.rs
// Configuration layer: optional conf/lottogen.conf in key = value format.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::defs::{DEFAULT_GAME_COUNT, DEFAULT_MAX_NUMBER, Number};
use crate::logging::{log_info, log_warning};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_count: u32,
    pub default_max_number: Number,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_GAME_COUNT,
            default_max_number: DEFAULT_MAX_NUMBER,
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_map(&parse_config(&content)))
    }

    // Malformed or missing individual values fall back per key.
    fn from_map(config_map: &HashMap<String, String>) -> Self {
        let default_count = config_map
            .get("default_count")
            .and_then(|c| c.parse::<u32>().ok())
            .unwrap_or(DEFAULT_GAME_COUNT);

        let default_max_number = config_map
            .get("default_max_number")
            .and_then(|m| m.parse::<Number>().ok())
            .unwrap_or(DEFAULT_MAX_NUMBER);

        AppConfig {
            default_count,
            default_max_number,
        }
    }

    pub fn load_or_default() -> Self {
        let config_path = "conf/lottogen.conf";

        match Self::from_file(config_path) {
            Ok(config) => {
                log_info(&format!("Loaded configuration from {config_path}"));
                config
            }
            Err(e) => {
                log_warning(&format!(
                    "Could not load config from {config_path}: {e}. Using defaults."
                ));
                Self::default()
            }
        }
    }
}

fn parse_config(content: &str) -> HashMap<String, String> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse key = value pairs
        if let Some((key, value)) = line.split_once('=') {
            config.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let content = r#"
            # This is a comment
            default_count = 8
            default_max_number = 49
            # Another comment
            unrelated_key = hello
        "#;

        let config = parse_config(content);
        assert_eq!(config.get("default_count"), Some(&"8".to_string()));
        assert_eq!(config.get("default_max_number"), Some(&"49".to_string()));
        assert_eq!(config.get("unrelated_key"), Some(&"hello".to_string()));
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.default_count, 4);
        assert_eq!(config.default_max_number, 45);
    }

    #[test]
    fn test_from_map_reads_values() {
        let map = parse_config("default_count = 10\ndefault_max_number = 47");
        let config = AppConfig::from_map(&map);
        assert_eq!(config.default_count, 10);
        assert_eq!(config.default_max_number, 47);
    }

    #[test]
    fn test_malformed_values_fall_back_per_key() {
        let map = parse_config("default_count = lots\ndefault_max_number = 49");
        let config = AppConfig::from_map(&map);
        assert_eq!(config.default_count, 4); // unparsable, falls back
        assert_eq!(config.default_max_number, 49);
    }
}
