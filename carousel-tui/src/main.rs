mod app;
mod error;
mod input;
mod manifest;
mod terminal;
mod track;
mod view;

use std::fs::File;
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::TuiError;
use crate::manifest::Manifest;

async fn run() -> Result<(), TuiError> {
    let log_file = File::create("carousel-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let manifest = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Manifest::load(&path)?,
        None => Manifest::demo(),
    };
    app::run(manifest).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
