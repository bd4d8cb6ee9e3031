// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, defaults and client-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identification for structured logging
pub mod service_names {
    /// Name reported in logs and the health endpoint
    pub const FRIDGE_RECIPES_SERVER: &str = "fridge-recipes-server";
}

/// Defaults used when the environment does not override them
pub mod defaults {
    /// HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// Log level
    pub const LOG_LEVEL: &str = "info";
    /// CORS origins (`*` allows any)
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Seed the recipe store with sample recipes at startup
    pub const SEED_SAMPLE_RECIPES: bool = true;
}

/// Environment variable names
pub mod env_keys {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Log level
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Sample data toggle
    pub const SEED_SAMPLE_RECIPES: &str = "SEED_SAMPLE_RECIPES";
}

/// Messages returned in response bodies
pub mod messages {
    /// Root endpoint banner
    pub const API_BANNER: &str = "Food Planner API";
    /// Recipe added
    pub const RECIPE_ADDED: &str = "Recipe added successfully";
    /// Products added to the fridge
    pub const PRODUCTS_ADDED: &str = "Products added to the fridge";
    /// Fridge cleared
    pub const FRIDGE_CLEARED: &str = "Fridge cleared";
    /// Ingredient search matched nothing
    pub const NO_RECIPES_FOR_INGREDIENTS: &str = "No recipes found with the given ingredients";
    /// Fridge search requested with an empty fridge
    pub const FRIDGE_EMPTY: &str = "The fridge is empty";
    /// Fridge search matched nothing
    pub const NO_RECIPES_FOR_FRIDGE: &str =
        "No recipes can be made from the current fridge contents";
}

/// Separators used when parsing client input
pub mod parsing {
    /// Separator between terms in an ingredients query
    pub const QUERY_SEPARATOR: char = ',';
}
