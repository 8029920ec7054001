//! Schema versioning for the review database.
//!
//! Applied versions are recorded in `schema_migrations`. A migration and its
//! bookkeeping row commit in the same transaction, so a failed step leaves the
//! schema at the previous version.

use std::collections::BTreeSet;

use rusqlite::{params, Connection, Transaction};

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

/// Ordered by version. Append only.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_app_state_table",
    sql: "CREATE TABLE IF NOT EXISTS app_state (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL,
              updated_at TEXT NOT NULL
          );",
}];

const CREATE_BOOKKEEPING: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL
)";

fn applied_versions(conn: &Connection) -> rusqlite::Result<BTreeSet<i64>> {
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations")?;
    let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;
    rows.collect()
}

/// Highest applied version, 0 for an empty database
pub fn schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )
}

fn apply(tx: &Transaction<'_>, migration: &Migration) -> rusqlite::Result<()> {
    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
        params![
            migration.version,
            migration.name,
            chrono::Utc::now().to_rfc3339()
        ],
    )?;
    Ok(())
}

/// Bring the schema up to date. Returns the versions applied by this call.
pub fn run_migrations(conn: &mut Connection) -> rusqlite::Result<Vec<i64>> {
    conn.execute(CREATE_BOOKKEEPING, [])?;
    let done = applied_versions(conn)?;

    let mut applied = Vec::new();
    for migration in MIGRATIONS.iter().filter(|m| !done.contains(&m.version)) {
        let tx = conn.transaction()?;
        if let Err(e) = apply(&tx, migration) {
            tracing::error!(
                version = migration.version,
                name = migration.name,
                error = %e,
                "Migration failed"
            );
            return Err(e);
        }
        tx.commit()?;

        tracing::info!(version = migration.version, name = migration.name, "Applied migration");
        applied.push(migration.version);
    }

    Ok(applied)
}
