extern crate chrono;
extern crate diesel;
extern crate tokio;

pub mod config;
pub mod db;
pub mod filters;
pub mod logger;
pub mod models;
pub mod sources;
pub mod targets;
pub mod ui;
