// Copyright 2023 Remi Bernotavicius

use std::fs;
use std::path::PathBuf;

mod catalog;
mod database;
mod dump;
mod nutrition;
mod seed;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
type Result<T> = std::result::Result<T, Error>;

/// Where the dump lands, relative to the working directory. The consuming
/// application ships this file as a bundled asset.
fn output_path() -> PathBuf {
    ["assets", "database", "recipes.sql"].iter().collect()
}

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let mut conn = database::establish_connection()?;
    let batch = seed::seed_database(&mut conn)?;
    let text = dump::render(&batch);

    let path = output_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, text)?;

    log::info!("seeded SQL dump at {}", path.display());
    Ok(())
}
