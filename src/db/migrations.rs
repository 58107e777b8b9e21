use rusqlite::Connection;

/// Run all pending migrations on the database.
///
/// Uses `PRAGMA user_version` to track which migrations have been applied.
pub fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    let version: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version < 1 {
        migrate_v0_to_v1(conn)?;
    }

    Ok(())
}

fn migrate_v0_to_v1(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE project (
            name        TEXT PRIMARY KEY,
            description TEXT,
            deadline    DATE
        );

        CREATE TABLE task (
            id           INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            priority     INTEGER DEFAULT 1,
            details      TEXT,
            status       TEXT,
            deadline     DATE,
            completed_on DATE,
            project      TEXT NOT NULL REFERENCES project(name)
        );

        CREATE INDEX idx_task_project ON task(project);

        PRAGMA user_version = 1;
        ",
    )?;
    Ok(())
}
