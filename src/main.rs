use std::sync::Arc;

use anyhow::Result;
use log::error;

use rabota::config::{self, Config};
use rabota::db;
use rabota::logger::setup_logger;
use rabota::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());

    // Make sure the schema exists before the menu touches it
    if let Err(err) = db::init::create_tables(&config) {
        error!("failed to initialize database: {err}");
        std::process::exit(1);
    }

    if let Err(err) = db::init::populate_companies(&config) {
        error!("failed to populate companies table: {err}");
    }

    ui::run(config).await;

    Ok(())
}
