use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use validator::Validate;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEV_OFFICIAL_EMAIL: &str = "dev@example.com";

#[derive(Debug, Clone, Validate)]
pub struct BfhlConfig {
    pub common: core_config::Config,
    /// Identifying email echoed in every success envelope.
    #[validate(email(message = "OFFICIAL_EMAIL must be a valid email address"))]
    pub official_email: String,
    #[validate(nested)]
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, Validate)]
pub struct GeminiSettings {
    /// When unset the service runs with a disabled answer provider and every
    /// AI request fails.
    pub api_key: Option<Secret<String>>,
    #[validate(length(min = 1, message = "GEMINI_MODEL cannot be empty"))]
    pub model: String,
    #[validate(url(message = "GEMINI_API_BASE must be a valid URL"))]
    pub api_base: String,
}

impl BfhlConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let config = BfhlConfig {
            common: common_config,
            official_email: get_env("OFFICIAL_EMAIL", Some(DEV_OFFICIAL_EMAIL), is_prod)?,
            gemini: GeminiSettings {
                api_key: get_optional_env("GEMINI_API_KEY", is_prod)?.map(Secret::new),
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL), false)?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), false)?,
            },
        };

        config.validate().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Invalid configuration: {}", e))
        })?;

        Ok(config)
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn get_optional_env(key: &str, is_prod: bool) -> Result<Option<String>, AppError> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(Some(val)),
        _ if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        _ => Ok(None),
    }
}
