use std::path::Path;

use anyhow::Context;
use rusqlite::Connection;
use stdlib_tour::db::{self, seed as demo, tasks};

fn open(path: &Path) -> anyhow::Result<Connection> {
    db::open_or_create(path).with_context(|| format!("Failed to open database {}", path.display()))
}

pub fn init(path: &Path) -> anyhow::Result<u8> {
    open(path)?;
    println!("Database ready at {}", path.display());
    Ok(0)
}

pub fn seed(path: &Path) -> anyhow::Result<u8> {
    let conn = open(path)?;
    if demo::seed(&conn).context("Failed to insert demo data")? {
        println!("Inserted demo project '{}'", demo::DEMO_PROJECT);
    } else {
        println!("Demo project '{}' already present", demo::DEMO_PROJECT);
    }
    Ok(0)
}

pub fn search(path: &Path, pattern: &str, json: bool) -> anyhow::Result<u8> {
    let conn = open(path)?;
    let rows = tasks::find_by_details(&conn, pattern)
        .with_context(|| format!("Search for '{}' failed", pattern))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(0);
    }

    for row in &rows {
        println!("{}", tasks::format_task_row(row));
    }
    Ok(0)
}
