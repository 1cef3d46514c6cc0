//! Domain model for student records.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `StudentId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod student;
