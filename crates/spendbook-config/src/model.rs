use serde::{Deserialize, Serialize};
use spendbook_core::utils::executable_dir;
use std::path::{Path, PathBuf};

/// Stores user-configurable preferences for the Spendbook CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the list files. Defaults to the executable's directory.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_transactions_file")]
    pub transactions_file: String,
    #[serde(default = "Config::default_categories_file")]
    pub categories_file: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            transactions_file: Self::default_transactions_file(),
            categories_file: Self::default_categories_file(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            currency: Self::default_currency(),
        }
    }
}

impl Config {
    pub fn default_transactions_file() -> String {
        "transactions.txt".into()
    }

    pub fn default_categories_file() -> String {
        "categories.txt".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    /// Picks the data directory: `override_dir`, then the configured one, then
    /// the directory of the running executable.
    pub fn resolve_data_dir(&self, override_dir: Option<PathBuf>) -> PathBuf {
        if let Some(path) = override_dir {
            return path;
        }
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        executable_dir()
    }

    pub fn transactions_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.transactions_file)
    }

    pub fn categories_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.categories_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{\"currency\": \"HUF\"}").unwrap();
        assert_eq!(config.currency, "HUF");
        assert_eq!(config.transactions_file, "transactions.txt");
        assert_eq!(config.categories_file, "categories.txt");
        assert!(config.ui_color_enabled);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn override_dir_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/configured")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_data_dir(Some(PathBuf::from("/override"))),
            PathBuf::from("/override")
        );
        assert_eq!(config.resolve_data_dir(None), PathBuf::from("/configured"));
    }
}
