use std::env;

use crate::features::reports::models::TransitionPolicy;
use crate::shared::constants::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_REPORT_LOCATION};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub reports: ReportsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Behaviour of the report pipelines
#[derive(Debug, Clone)]
pub struct ReportsConfig {
    /// Fill the store with the sample reports at startup
    pub seed_sample_data: bool,
    /// Location recorded on citizen submissions
    pub default_location: String,
    /// Rule for administrative status changes
    pub status_transitions: TransitionPolicy,
    /// Largest image accepted for preview, in bytes
    pub max_image_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            reports: ReportsConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Civic Report API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Civic Report".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl ReportsConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed_sample_data = match lookup("REPORTS_SEED_SAMPLE_DATA") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| "REPORTS_SEED_SAMPLE_DATA must be true or false".to_string())?,
            None => defaults.seed_sample_data,
        };

        let default_location = lookup("REPORTS_DEFAULT_LOCATION")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.default_location);

        let status_transitions = match lookup("REPORTS_STATUS_TRANSITIONS") {
            Some(raw) => raw.parse::<TransitionPolicy>()?,
            None => defaults.status_transitions,
        };

        let max_image_bytes = match lookup("REPORTS_MAX_IMAGE_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| "REPORTS_MAX_IMAGE_BYTES must be a valid number".to_string())?,
            None => defaults.max_image_bytes,
        };

        Ok(Self {
            seed_sample_data,
            default_location,
            status_transitions,
            max_image_bytes,
        })
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            default_location: DEFAULT_REPORT_LOCATION.to_string(),
            status_transitions: TransitionPolicy::Unrestricted,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
