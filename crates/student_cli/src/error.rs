//! Fatal console errors.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use student_core::db::DbError;
use student_core::RepoError;

/// Failures that end the process.
#[derive(Debug)]
pub enum CliError {
    /// Record store could not be opened or a statement failed.
    Store(RepoError),
    /// Standard input/output failed.
    Io(io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "record store failure: {err}"),
            Self::Io(err) => write!(f, "console I/O failure: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Store(RepoError::Db(value))
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
