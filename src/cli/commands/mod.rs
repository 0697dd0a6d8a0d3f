pub mod config;
pub mod create;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::open(&cfg.database, cfg.busy_timeout())?;
    init_db(&pool.conn)?;
    Ok(pool)
}
