pub mod migrations;
pub mod projects;
pub mod regexp;
pub mod seed;
pub mod tasks;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

pub use regexp::register_regexp;

/// Open or create the to-do database at the given path.
///
/// Sets WAL journal mode, enables foreign keys, applies migrations and
/// installs the `regexp()` function. Creates parent directories if needed.
pub fn open_or_create(path: &Path) -> rusqlite::Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
                Some(format!("Cannot create directory {}: {}", parent.display(), e)),
            )
        })?;
    }

    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    migrations::migrate(&conn)?;
    register_regexp(&conn)?;
    tracing::debug!(path = %path.display(), "opened database");
    Ok(conn)
}

/// Returns the default database path: `~/.local/share/stdlib-tour/todo.db`
///
/// Falls back to the working directory when no data directory is known.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("stdlib-tour"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todo.db")
}

/// Create an in-memory database with migrations and `regexp()`, for testing.
#[cfg(test)]
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.pragma_update(None, "foreign_keys", "ON").expect("enable foreign keys");
    migrations::migrate(&conn).expect("run migrations");
    register_regexp(&conn).expect("register regexp");
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_or_create_creates_db() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("subdir").join("todo.db");

        let conn = open_or_create(&db_path).expect("open_or_create should succeed");

        assert!(db_path.exists());

        let mode: String = conn
            .pragma_query_value(None, "journal_mode", |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");

        let fk: i32 = conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);

        // regexp() is usable straight away
        let matched: bool = conn
            .query_row("SELECT 'write about x' REGEXP 'write'", [], |row| row.get(0))
            .unwrap();
        assert!(matched);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("todo.db");

        {
            let conn = open_or_create(&db_path).unwrap();
            seed::seed(&conn).unwrap();
        }

        let conn = open_or_create(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM task", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_default_db_path_ends_correctly() {
        let path = default_db_path();
        assert!(path.ends_with("stdlib-tour/todo.db"));
    }
}
