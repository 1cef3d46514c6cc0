//! Repository contracts and SQLite persistence.
//!
//! # Responsibility
//! - Define the data access contract for student records.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - Every operation issues exactly one statement.
//! - Zero affected rows on update/delete surfaces as `RepoError::NotFound`.

pub mod student_repo;
