use crate::db::app_log;
use crate::db::db_utils::table_exists;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Transaction, TransactionBehavior};

/// Ensure that the internal `app_log` table exists.
fn ensure_app_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS app_log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `streaks` and `logs` tables with the current schema.
///
/// `logs.streak_id` has no foreign key: entries outlive their streak.
fn create_core_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS streaks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL CHECK(trim(title) <> ''),
            start_date  TEXT NOT NULL,
            last_reset  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            streak_id   INTEGER NOT NULL,
            action      TEXT NOT NULL CHECK(action IN ('create','reset','delete')),
            timestamp   TEXT NOT NULL,
            reason      TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// A schema change applied at most once, tracked in `app_log`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251019_0001_logs_streak_index",
        description: "Index logs by streak",
        sql: r#"
            CREATE INDEX IF NOT EXISTS idx_logs_streak ON logs(streak_id, id);
        "#,
    },
    Migration {
        version: "20251019_0002_logs_append_only",
        description: "Reject UPDATE and DELETE on logs",
        sql: r#"
            CREATE TRIGGER IF NOT EXISTS logs_no_update
            BEFORE UPDATE ON logs
            BEGIN
                SELECT RAISE(ABORT, 'logs are append-only');
            END;

            CREATE TRIGGER IF NOT EXISTS logs_no_delete
            BEFORE DELETE ON logs
            BEGIN
                SELECT RAISE(ABORT, 'logs are append-only');
            END;
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM app_log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Take the write lock up front so concurrent migrators queue on it.
fn immediate(conn: &Connection) -> rusqlite::Result<Transaction<'_>> {
    Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
}

/// Apply one migration and its `app_log` marker atomically.
fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    if is_applied(conn, m.version)? {
        return Ok(());
    }

    let tx = immediate(conn)?;
    // another process may have applied it while we waited for the lock
    if is_applied(&tx, m.version)? {
        return Ok(());
    }
    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
    app_log::record(&tx, "migration_applied", m.version, m.description)?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Fold the legacy `deletion_logs` table (delete-only history kept by
/// early versions) into `logs`, then drop it.
fn migrate_legacy_deletion_logs(conn: &Connection) -> AppResult<()> {
    if !table_exists(conn, "deletion_logs")? {
        return Ok(());
    }

    let tx = immediate(conn)?;
    if !table_exists(&tx, "deletion_logs")? {
        return Ok(());
    }

    warning("Legacy deletion_logs table detected, moving rows into logs...");

    let moved = tx.execute(
        "INSERT INTO logs (streak_id, action, timestamp, reason)
         SELECT streak_id, 'delete', deleted_at, COALESCE(reason, '')
         FROM deletion_logs
         ORDER BY deleted_at ASC",
        [],
    )?;
    tx.execute_batch("DROP TABLE deletion_logs;")?;
    app_log::record(
        &tx,
        "migration_applied",
        "legacy_deletion_logs",
        &format!("Moved {moved} legacy deletion rows into logs"),
    )?;
    tx.commit()?;

    success(format!("Moved {moved} legacy deletion entries into logs."));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db(). Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Internal log first (migration markers live there), then core tables
    let tx = immediate(conn)?;
    ensure_app_log_table(&tx)?;
    create_core_tables(&tx)?;
    tx.commit()?;

    // 2) Legacy data, before the append-only triggers exist
    migrate_legacy_deletion_logs(conn)?;

    // 3) Versioned changes
    for m in MIGRATIONS {
        apply(conn, m)?;
    }

    Ok(())
}

/// True when `streaks`, `logs` and every versioned migration are in place.
pub fn is_up_to_date(conn: &Connection) -> AppResult<bool> {
    for table in ["app_log", "streaks", "logs"] {
        if !table_exists(conn, table)? {
            return Ok(false);
        }
    }
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            return Ok(false);
        }
    }
    Ok(true)
}
