use anyhow::{Context, Result};
use meal_recommender::catalog::{builtin_catalog, load_catalog_file, FoodCatalog};
use meal_recommender::cli::{parse_args, Command};
use meal_recommender::config::RecommenderConfig;
use meal_recommender::logging;
use meal_recommender::recommender::Recommender;
use serde::Serialize;
use std::path::PathBuf;
use tokio::task;
use tracing::info;

async fn load_catalog(path: Option<PathBuf>) -> Result<FoodCatalog> {
    let Some(path) = path else {
        info!("No catalog file configured, using built-in dishes");
        return Ok(builtin_catalog());
    };
    let path_str = path.display().to_string();
    let catalog = task::spawn_blocking(move || load_catalog_file(&path))
        .await
        .context("Catalog loading task failed")?
        .with_context(|| format!("Failed to load catalog file '{}'", path_str))?;
    info!(path = %path_str, items = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli_args = parse_args();
    let mut config = RecommenderConfig::from_env();
    logging::init(&config.logging)?;

    let catalog_path = cli_args.catalog.clone().or_else(|| config.catalog_path.clone());
    let catalog = load_catalog(catalog_path).await?;

    match cli_args.command {
        Command::Needs(profile) => {
            let recommender = Recommender::new(catalog, &config);
            print_json(&recommender.daily_needs_from_json(&profile.to_json()))?;
        }
        Command::Recommend { profile, eaten, top_n } => {
            if let Some(top_n) = top_n {
                config.top_n = top_n;
            }
            let recommender = Recommender::new(catalog, &config);
            let eaten = eaten.to_json();
            print_json(&recommender.recommendations_from_json(&profile.to_json(), eaten.as_ref()))?;
        }
        Command::Lookup { label } => {
            let recommender = Recommender::new(catalog, &config);
            print_json(&recommender.lookup_record(&label))?;
        }
    }

    Ok(())
}
