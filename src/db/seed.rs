//! Demo data for the to-do database.

use chrono::NaiveDate;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use tracing::info;

use super::{projects, tasks};

/// Name of the project the demo tasks belong to.
pub const DEMO_PROJECT: &str = "stdlib-tour";

/// (details, status, deadline)
const DEMO_TASKS: [(&str, &str, (i32, u32, u32)); 3] = [
    ("write about select", "done", (2016, 4, 25)),
    ("write about random", "waiting", (2016, 8, 22)),
    ("write about sqlite3", "active", (2017, 7, 31)),
];

/// Insert the demo project and its tasks unless they are already there.
///
/// The existence check and the inserts share one write transaction, so
/// concurrent seeders cannot both insert. Returns `true` when rows were written.
pub fn seed(conn: &Connection) -> rusqlite::Result<bool> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;

    if projects::find(&tx, DEMO_PROJECT)?.is_some() {
        info!(project = DEMO_PROJECT, "demo data already present");
        return Ok(false);
    }

    projects::insert(
        &tx,
        &projects::Project {
            name: DEMO_PROJECT.to_string(),
            description: Some("Standard library tour".to_string()),
            deadline: NaiveDate::from_ymd_opt(2016, 11, 1),
        },
    )?;

    for (details, status, (y, m, d)) in DEMO_TASKS {
        tasks::insert(
            &tx,
            &tasks::Task {
                id: None,
                priority: 1,
                details: details.to_string(),
                status: Some(status.to_string()),
                deadline: NaiveDate::from_ymd_opt(y, m, d),
                completed_on: None,
                project: DEMO_PROJECT.to_string(),
            },
        )?;
    }

    tx.commit()?;
    info!(project = DEMO_PROJECT, "inserted demo data");
    Ok(true)
}
