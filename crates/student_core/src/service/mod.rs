//! Use-case services over repositories.
//!
//! # Responsibility
//! - Expose the four student operations to the console layer.
//! - Emit operation-level diagnostic events.

pub mod student_service;
