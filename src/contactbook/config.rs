use crate::error::{BookError, Result};
use crate::fields::DateFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for the contact book, stored in the user's config dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// How birthdays are written and parsed
    #[serde(default)]
    pub date_format: DateFormat,

    /// Contacts shown per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BookConfig {
    pub const KEYS: [&'static str; 2] = ["date-format", "page-size"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookError::Serialization)?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "date-format" => Some(self.date_format.to_string()),
            "page-size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "date-format" => {
                self.date_format = value.parse()?;
                Ok(())
            }
            "page-size" => match value.parse::<usize>() {
                Ok(n) if n > 0 => {
                    self.page_size = n;
                    Ok(())
                }
                _ => Err(format!(
                    "Invalid page size: {} (expected a positive number)",
                    value
                )),
            },
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BookConfig::default();
        assert_eq!(config.date_format, DateFormat::DayFirst);
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = BookConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = BookConfig::default();
        config.set("date-format", "month-first").unwrap();
        config.set("page-size", "7").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.date_format, DateFormat::MonthFirst);
        assert_eq!(loaded.page_size, 7);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();

        let loaded = BookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.date_format, DateFormat::DayFirst);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = BookConfig::default();
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("page-size", "many").is_err());
        assert!(config.set("date-format", "iso").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = BookConfig::default();
        assert_eq!(config.get("date-format").as_deref(), Some("day-first"));
        assert_eq!(config.get("page-size").as_deref(), Some("5"));
        assert_eq!(config.get("colour"), None);
    }
}
