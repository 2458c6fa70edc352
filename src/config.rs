use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealplanner_assistant::OpenRouterConfig;
use mealplanner_shared::UnitSystem;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub planner: PlannerConfig,
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Servings shown in previews and on the grocery list
    pub servings: u32,
    pub unit_system: UnitSystem,
    /// JSON catalog replacing the built-in meals
    #[serde(default)]
    pub catalog_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    pub endpoint: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
    pub max_tokens: u32,
}

impl From<AssistantConfig> for OpenRouterConfig {
    fn from(value: AssistantConfig) -> Self {
        Self {
            endpoint: value.endpoint,
            model: value.model,
            api_key: value.api_key,
            max_tokens: value.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALPLANNER__PLANNER__SERVINGS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("planner.servings", 2)?
            .set_default("planner.unit_system", "metric")?
            .set_default(
                "assistant.endpoint",
                "https://openrouter.ai/api/v1/chat/completions",
            )?
            .set_default("assistant.model", "mistral/mistral-7b-instruct")?
            .set_default("assistant.max_tokens", 1200)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional, missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALPLANNER")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("OPENROUTER_API_KEY") {
            builder = builder.set_override("assistant.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.planner.servings < 1 {
            return Err("Planner servings must be at least 1".to_string());
        }
        if self.assistant.max_tokens == 0 {
            return Err("Assistant max_tokens must be greater than 0".to_string());
        }
        if self.assistant.endpoint.trim().is_empty() {
            return Err("Assistant endpoint must not be empty".to_string());
        }
        if self.assistant.model.trim().is_empty() {
            return Err("Assistant model must not be empty".to_string());
        }
        Ok(())
    }
}
