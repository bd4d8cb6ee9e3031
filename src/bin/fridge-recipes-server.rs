// ABOUTME: Server binary for the fridge recipes API
// ABOUTME: Loads configuration, initializes logging, seeds sample data and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Fridge Recipes Server Binary
//!
//! Composition root: builds the stores and shared resources, then runs the
//! HTTP server until shutdown.

use anyhow::Result;
use clap::Parser;
use fridge_recipes_server::{
    config::ServerConfig,
    logging,
    resources::ServerResources,
    server::RecipeServer,
    store::{sample_recipes, RecipeStore},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fridge-recipes-server")]
#[command(about = "Fridge Recipes API - find recipes by ingredients or by fridge contents")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Start with an empty recipe store
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.no_seed {
        config.seed_sample_recipes = false;
    }

    logging::init_for_server(&config)?;

    info!("Starting Fridge Recipes API");
    info!("{}", config.summary());

    let recipes = if config.seed_sample_recipes {
        let store = RecipeStore::with_recipes(sample_recipes())?;
        info!(recipes.seeded = store.len(), "Recipe store seeded");
        store
    } else {
        RecipeStore::new()
    };

    let resources = Arc::new(ServerResources::new(Arc::new(config), recipes));
    let server = RecipeServer::new(resources);

    if let Err(e) = server.run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
