//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/update/delete/list over the `students` table.
//! - Decode rows into `StudentRecord`, rejecting values the model cannot hold.
//!
//! # Invariants
//! - All statements are parameterized.
//! - Listing order is `id ASC`.

use crate::db::DbError;
use crate::model::student::{NewStudent, StudentId, StudentRecord};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    age,
    email
FROM students";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for student persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(StudentId),
    InvalidData(String),
}

impl RepoError {
    /// Whether this error only means "no row with that id".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted student data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for student CRUD operations.
pub trait StudentRepository {
    /// Inserts one row and returns the store-assigned id.
    fn create_student(&self, student: &NewStudent) -> RepoResult<StudentId>;
    /// Overwrites name, age and email of the row with `id`.
    fn update_student(&self, id: StudentId, student: &NewStudent) -> RepoResult<()>;
    /// Removes the row with `id`.
    fn delete_student(&self, id: StudentId) -> RepoResult<()>;
    /// Returns every row ordered by id.
    fn list_students(&self) -> RepoResult<Vec<StudentRecord>>;
}

/// SQLite-backed student repository borrowing the process connection.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn create_student(&self, student: &NewStudent) -> RepoResult<StudentId> {
        self.conn.execute(
            "INSERT INTO students (name, age, email) VALUES (?1, ?2, ?3);",
            params![student.name.as_str(), student.age, student.email.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_student(&self, id: StudentId, student: &NewStudent) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE students
             SET
                name = ?1,
                age = ?2,
                email = ?3
             WHERE id = ?4;",
            params![
                student.name.as_str(),
                student.age,
                student.email.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn list_students(&self) -> RepoResult<Vec<StudentRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<StudentRecord> {
    let id: StudentId = row.get("id")?;

    let name = row.get::<_, Option<String>>("name")?.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL name for id {id} in students.name"))
    })?;

    let age = match row.get::<_, Option<i64>>("age")? {
        Some(value) => i32::try_from(value).map_err(|_| {
            RepoError::InvalidData(format!(
                "age `{value}` out of range for id {id} in students.age"
            ))
        })?,
        None => {
            return Err(RepoError::InvalidData(format!(
                "NULL age for id {id} in students.age"
            )));
        }
    };

    let email = row.get::<_, Option<String>>("email")?.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL email for id {id} in students.email"))
    })?;

    Ok(StudentRecord::from_parts(id, NewStudent { name, age, email }))
}
