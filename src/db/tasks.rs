use chrono::NaiveDate;
use rusqlite::{named_params, params, Connection};
use serde::Serialize;

/// Pattern used by the `db search` command when none is given.
pub const DEFAULT_PATTERN: &str = ".*[wW]rite [aA]bout.*";

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub priority: i64,
    pub details: String,
    pub status: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub completed_on: Option<NaiveDate>,
    pub project: String,
}

/// The columns a details search returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskSummary {
    pub id: i64,
    pub priority: i64,
    pub details: String,
    pub status: Option<String>,
    pub deadline: Option<NaiveDate>,
}

/// Insert a task. Returns the new row id.
pub fn insert(conn: &Connection, task: &Task) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO task (priority, details, status, deadline, completed_on, project)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            task.priority,
            task.details,
            task.status,
            task.deadline,
            task.completed_on,
            task.project,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Tasks whose details match `pattern` from the start, soonest deadline first.
///
/// Requires `regexp()` to be registered on `conn`.
pub fn find_by_details(conn: &Connection, pattern: &str) -> rusqlite::Result<Vec<TaskSummary>> {
    let mut stmt = conn.prepare(
        "SELECT id, priority, details, status, deadline FROM task
         WHERE details REGEXP :pattern
         ORDER BY deadline, priority",
    )?;
    let rows = stmt.query_map(named_params! { ":pattern": pattern }, |row| {
        Ok(TaskSummary {
            id: row.get(0)?,
            priority: row.get(1)?,
            details: row.get(2)?,
            status: row.get(3)?,
            deadline: row.get(4)?,
        })
    })?;
    rows.collect()
}

/// One line per task: ` 1 [1] write about select        [done    ] (2016-04-25)`
pub fn format_task_row(task: &TaskSummary) -> String {
    let deadline = task
        .deadline
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:2} [{}] {:<25} [{:<8}] ({})",
        task.id,
        task.priority,
        task.details,
        task.status.as_deref().unwrap_or(""),
        deadline
    )
}
