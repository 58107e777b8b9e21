//! SQL `regexp()` backed by the `regex` crate.
//!
//! SQLite rewrites `X REGEXP Y` into `regexp(Y, X)`, so the pattern is the
//! first argument and the text under test the second.

use std::sync::Arc;

use regex::Regex;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Error};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install `regexp(pattern, input)` on `conn`.
///
/// The pattern must match at the start of `input`; it does not have to
/// consume all of it. Compiled patterns are cached per statement. A `NULL`
/// input yields `NULL`, and an invalid pattern fails the statement.
pub fn register_regexp(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "regexp",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let re: Arc<Regex> = ctx.get_or_create_aux(0, |vr| -> Result<_, BoxError> {
                Ok(Regex::new(vr.as_str()?)?)
            })?;

            let input = match ctx.get_raw(1) {
                ValueRef::Null => return Ok(None),
                value => value
                    .as_str()
                    .map_err(|e| Error::UserFunctionError(e.into()))?,
            };

            Ok(Some(matches_at_start(&re, input)))
        },
    )
}

/// Whether `re` matches a prefix of `input`.
///
/// The leftmost match starts at 0 whenever any match does.
pub fn matches_at_start(re: &Regex, input: &str) -> bool {
    re.find(input).is_some_and(|m| m.start() == 0)
}
