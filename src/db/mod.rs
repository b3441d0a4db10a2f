pub mod company;
pub mod init;
pub mod schema;
pub mod stats;
pub mod vacancy;

use std::sync::Arc;

use diesel::{Connection, ConnectionError, PgConnection};
use dotenvy::dotenv;

use crate::config::Config;

/// One connection per operation; callers open, use and drop. Temp tables
/// created on a connection disappear when it is closed.
pub fn establish_connection(config: &Arc<Config>) -> Result<PgConnection, ConnectionError> {
    dotenv().ok();

    PgConnection::establish(&config.database_url)
}
