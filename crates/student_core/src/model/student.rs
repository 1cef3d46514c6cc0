//! Student record model.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes afterwards.
//! - Updates overwrite `name`, `age` and `email` together.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned row id (`students.id`).
pub type StudentId = i64;

/// Field values for a student that has not been (or is about to be re-)persisted.
///
/// Used as the insert payload for create and the replacement payload for update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, age: i32, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

/// One persisted row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl StudentRecord {
    /// Combines a store-assigned id with field values.
    pub fn from_parts(id: StudentId, fields: NewStudent) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            email: fields.email,
        }
    }
}

/// Console listing line: `ID: 1, Name: Alice, Age: 20, Email: a@x.com`.
impl Display for StudentRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Email: {}",
            self.id, self.name, self.age, self.email
        )
    }
}
