// Configuration loading and parsing
//
// Process configuration comes from environment variables, after an optional
// .env file has been loaded by dotenvy. Invalid values fail startup.

use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3333;
pub const DEFAULT_HANDLER_MODEL: &str = hookwatch_openai::DEFAULT_HANDLER_MODEL;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("APP_ENV must be one of development, production, test (got {0:?})")]
    InvalidAppEnv(String),

    #[error("PORT must be a valid port number (got {0:?})")]
    InvalidPort(String),

    #[error("{name} must be true or false (got {value:?})")]
    InvalidBool { name: &'static str, value: String },

    #[error("DATABASE_URL environment variable required (set DEV_MODE=true to run without a database)")]
    MissingDatabaseUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::InvalidAppEnv(s.to_string())),
        }
    }
}

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Self::Any;
        }
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if origins.is_empty() {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

/// LLM settings for the handler generator. Absent key means echo mode.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: Option<String>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: AppEnv,
    pub port: u16,
    pub database_url: Option<String>,
    pub dev_mode: bool,
    pub run_migrations: bool,
    pub cors_origins: CorsOrigins,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// Environment variables:
    /// - `APP_ENV`: development | production | test (default: development)
    /// - `PORT`: listen port (default: 3333)
    /// - `DATABASE_URL`: PostgreSQL URL, required unless `DEV_MODE=true`
    /// - `DEV_MODE`: use the in-memory store (default: false)
    /// - `RUN_MIGRATIONS`: apply migrations on startup (default: true)
    /// - `CORS_ALLOWED_ORIGINS`: "*" or a comma-separated list (default: "*")
    /// - `OPENAI_API_KEY`: enables LLM handler drafts
    /// - `HANDLER_MODEL`: model for handler drafts (default: gpt-4o-mini)
    /// - `LLM_API_URL`: OpenAI-compatible chat completions URL
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values behave like unset ones
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = match var("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => AppEnv::default(),
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let dev_mode = parse_bool("DEV_MODE", var("DEV_MODE"), false)?;
        let run_migrations = parse_bool("RUN_MIGRATIONS", var("RUN_MIGRATIONS"), true)?;

        let database_url = var("DATABASE_URL");
        if database_url.is_none() && !dev_mode {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        let cors_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|raw| CorsOrigins::parse(&raw))
            .unwrap_or(CorsOrigins::Any);

        let llm = LlmConfig {
            api_key: var("OPENAI_API_KEY"),
            model: var("HANDLER_MODEL").unwrap_or_else(|| DEFAULT_HANDLER_MODEL.to_string()),
            api_url: var("LLM_API_URL"),
        };

        Ok(Self {
            env,
            port,
            database_url,
            dev_mode,
            run_migrations,
            cors_origins,
            llm,
        })
    }
}

fn parse_bool(name: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value: raw }),
    }
}
