#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset};
use rstreaks::db::initialize::init_db;
use rstreaks::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rst() -> Command {
    cargo_bin_cmd!("rstreaks")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// leftovers (including WAL side files) from a previous run
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstreaks.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    for suffix in ["", "-wal", "-shm"] {
        fs::remove_file(format!("{db_path}{suffix}")).ok();
    }
    db_path
}

/// Fresh in-memory database with the full schema
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// File database at `db_path` with the full schema
pub fn file_pool(db_path: &str) -> DbPool {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// RFC 3339 literal → timestamp
pub fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid RFC 3339 literal")
}

/// Initialize a DB through the CLI in test mode (no config file written)
pub fn init_cli_db(db_path: &str) {
    rst()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
