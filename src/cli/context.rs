use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use spendbook_config::{Config, ConfigManager};
use spendbook_core::{category_warnings, FinanceStore};
use spendbook_domain::{Category, Transaction};
use spendbook_storage_json::{JsonFileStorage, StoragePaths};
use strsim::levenshtein;
use tracing::{debug, warn};

use crate::cli::commands;
use crate::cli::error::{CliError, CommandError, CommandResult, LoopControl};
use crate::cli::io;
use crate::cli::output::{self, ConsoleNotifier, OutputPreferences};
use crate::cli::registry::CommandRegistry;

pub const SCRIPT_ENV: &str = "SPENDBOOK_CLI_SCRIPT";
pub const DATA_DIR_ENV: &str = "SPENDBOOK_DATA_DIR";
pub const CONFIG_DIR_ENV: &str = "SPENDBOOK_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// State shared by every command for the lifetime of the shell.
pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    store: FinanceStore,
    config: Config,
    pub(crate) categories: Vec<Category>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) running: bool,
}

impl ShellContext {
    /// Builds the context from the user configuration and environment overrides,
    /// then loads both lists. An unusable config file falls back to defaults.
    pub fn new(mode: CliMode) -> Self {
        let manager = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => ConfigManager::with_base_dir(PathBuf::from(dir)),
            None => ConfigManager::user_default(),
        };
        let config = manager.load_or_create().unwrap_or_else(|err| {
            output::warning(format!(
                "Could not load configuration `{}` ({err}); using defaults.",
                manager.config_path().display()
            ));
            Config::default()
        });
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });

        let data_dir = config.resolve_data_dir(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from));
        let paths = StoragePaths {
            transactions: config.transactions_path(&data_dir),
            categories: config.categories_path(&data_dir),
        };
        debug!(?paths, "using data files");
        let store = FinanceStore::new(JsonFileStorage::new(paths)).with_notifier(ConsoleNotifier);

        Self::with_store(mode, store, config)
    }

    pub fn with_store(mode: CliMode, store: FinanceStore, config: Config) -> Self {
        let categories = store.load_categories();
        let transactions = store.load_transactions();
        for warning in category_warnings(&categories, &transactions) {
            warn!("{warning}");
        }

        let mut registry = CommandRegistry::new();
        for entry in commands::definitions() {
            registry.register(entry);
        }

        Self {
            mode,
            registry,
            store,
            config,
            categories,
            transactions,
            running: true,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn store(&self) -> &FinanceStore {
        &self.store
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn prompt(&self) -> String {
        "spendbook> ".to_string()
    }

    /// Runs one tokenised input line.
    pub fn dispatch(&mut self, tokens: &[String]) -> CommandResult {
        let Some((name, consumed)) = self.registry.resolve(tokens) else {
            self.suggest_command(&tokens.join(" "));
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = tokens[consumed..].iter().map(String::as_str).collect();
        match self.registry.handler(name) {
            Some(handler) => handler(self, &args),
            None => Ok(LoopControl::Continue),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| {
                let width = name.split_whitespace().count();
                let head = lowered
                    .split_whitespace()
                    .take(width)
                    .collect::<Vec<_>>()
                    .join(" ");
                (levenshtein(name, &head), name)
            })
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(io::confirm_action("Exit Spendbook?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            CommandError::Core(core) => output::warning(core),
            other => output::error(other),
        }
    }
}
