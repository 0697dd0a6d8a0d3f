use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::app_log;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ Config file + DB location
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rStreaks…");
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ Open DB (creates the file) and run migrations
    //
    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", &db_path));

    //
    // 3️⃣ Internal log (non-blocking)
    //
    if let Err(e) = app_log::record(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rStreaks initialization completed!");
    Ok(())
}
