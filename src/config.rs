use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    pub database_url: String,
    pub sj_api_key: String,
    pub max_pages: u32,
    pub per_page: u32,
    pub filter_to_target_companies: bool,
}

pub fn create_test_config() -> Config {
    Config {
        database_url: "postgres://localhost/rabota_test".to_string(),
        sj_api_key: "xxx".to_string(),
        max_pages: 2,
        per_page: 100,
        filter_to_target_companies: true,
    }
}

pub fn read_config() -> Config {
    dotenv().ok();
    env::var(CONFIG_PATH_ENV)
        .map_err(|_| format!("{CONFIG_PATH_ENV} .env not set"))
        .and_then(|config_path| std::fs::read(config_path).map_err(|e| e.to_string()))
        .and_then(|bytes| toml::from_slice(&bytes).map_err(|e| e.to_string()))
        .unwrap_or_else(|err| {
            error!("failed to read config: {err}");
            std::process::exit(1);
        })
}
