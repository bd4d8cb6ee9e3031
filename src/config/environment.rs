// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration

use crate::constants::{defaults, env_keys};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP API port
    pub http_port: u16,
    /// `RUST_LOG` filter directives, passed unchanged to the log subscriber
    pub log_filter: String,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Load sample recipes into the store at startup
    pub seed_sample_recipes: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            http_port: defaults::HTTP_PORT,
            log_filter: defaults::LOG_LEVEL.to_owned(),
            environment: Environment::default(),
            cors: CorsConfig::default(),
            seed_sample_recipes: defaults::SEED_SAMPLE_RECIPES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed
    /// (a port outside `u16`, a non-boolean seed flag, an invalid address).
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_keys::HOST, defaults::HOST)
                .parse()
                .context("Invalid HOST value")?,
            http_port: env_var_or(env_keys::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_filter: env_var_or(env_keys::RUST_LOG, defaults::LOG_LEVEL),
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_keys::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            seed_sample_recipes: env_var_or(
                env_keys::SEED_SAMPLE_RECIPES,
                &defaults::SEED_SAMPLE_RECIPES.to_string(),
            )
            .parse()
            .context("Invalid SEED_SAMPLE_RECIPES value")?,
        };

        Ok(config)
    }

    /// Socket address the HTTP server binds to
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fridge Recipes Server Configuration:\n\
             - Bind Address: {}\n\
             - Log Filter: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Sample Recipes: {}",
            self.bind_address(),
            self.log_filter,
            self.environment,
            self.cors.allowed_origins,
            if self.seed_sample_recipes {
                "Enabled"
            } else {
                "Disabled"
            },
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
