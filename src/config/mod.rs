// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration module
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, ServerConfig};
