//! `students` table definition.
//!
//! The store is embedded, so the table is created on open when missing.
//! There is exactly one shape; no version tracking.

use crate::db::DbResult;
use rusqlite::Connection;

/// Name of the single table holding student rows.
pub const STUDENTS_TABLE: &str = "students";

const CREATE_STUDENTS_SQL: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER,
    email TEXT
);";

/// Creates the `students` table if it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_STUDENTS_SQL)?;
    Ok(())
}

/// Returns whether the `students` table is present.
pub fn students_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [STUDENTS_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
