use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
}

pub fn insert(conn: &Connection, project: &Project) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO project (name, description, deadline) VALUES (?1, ?2, ?3)",
        params![project.name, project.description, project.deadline],
    )?;
    Ok(())
}

pub fn find(conn: &Connection, name: &str) -> rusqlite::Result<Option<Project>> {
    conn.query_row(
        "SELECT name, description, deadline FROM project WHERE name = ?1",
        params![name],
        row_to_project,
    )
    .optional()
}

fn row_to_project(row: &rusqlite::Row) -> rusqlite::Result<Project> {
    Ok(Project {
        name: row.get(0)?,
        description: row.get(1)?,
        deadline: row.get(2)?,
    })
}
