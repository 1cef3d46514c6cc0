//! Student use-case service.
//!
//! # Invariants
//! - Service methods delegate one-to-one to the repository; no extra statements.
//! - Logged fields are ids, counts and status only.

use crate::model::student::{NewStudent, StudentId, StudentRecord};
use crate::repo::student_repo::{RepoError, RepoResult, StudentRepository};
use log::{info, warn};

/// Use-case wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a new student and returns the store-assigned id.
    pub fn add_student(&self, student: &NewStudent) -> RepoResult<StudentId> {
        let id = self.repo.create_student(student).inspect_err(|err| {
            warn!("event=student_create module=service status=error error={err}");
        })?;
        info!("event=student_create module=service status=ok id={id}");
        Ok(id)
    }

    /// Replaces all fields of the student with `id`.
    ///
    /// Returns `RepoError::NotFound` when no row matched.
    pub fn update_student(&self, id: StudentId, student: &NewStudent) -> RepoResult<()> {
        let result = self.repo.update_student(id, student);
        log_mutation("student_update", id, &result);
        result
    }

    /// Deletes the student with `id`.
    ///
    /// Returns `RepoError::NotFound` when no row matched.
    pub fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        let result = self.repo.delete_student(id);
        log_mutation("student_delete", id, &result);
        result
    }

    /// Lists all students ordered by id.
    pub fn list_students(&self) -> RepoResult<Vec<StudentRecord>> {
        let students = self.repo.list_students().inspect_err(|err| {
            warn!("event=student_list module=service status=error error={err}");
        })?;
        info!(
            "event=student_list module=service status=ok count={}",
            students.len()
        );
        Ok(students)
    }
}

fn log_mutation(event: &str, id: StudentId, result: &RepoResult<()>) {
    match result {
        Ok(()) => info!("event={event} module=service status=ok id={id}"),
        Err(RepoError::NotFound(_)) => {
            info!("event={event} module=service status=not_found id={id}")
        }
        Err(err) => warn!("event={event} module=service status=error id={id} error={err}"),
    }
}
