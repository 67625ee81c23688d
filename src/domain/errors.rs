use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("end date {end} cannot be before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("{employee_name} already has a holiday overlapping {start} to {end}")]
    OverlapConflict {
        employee_name: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("'{0}' is not a valid holiday id")]
    InvalidIdentifier(String),

    #[error("holiday {0} not found")]
    NotFound(String),

    #[error("'{0}' is not an autocomplete field")]
    InvalidField(String),

    #[error("{0}")]
    Validation(String),

    #[error("stored holiday record is malformed: {0}")]
    MalformedRecord(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type HolidayResult<T> = Result<T, HolidayError>;

impl From<sqlx::Error> for HolidayError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => HolidayError::StorageUnavailable(err.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => HolidayError::MalformedRecord(err.to_string()),
            _ => HolidayError::Internal(err.to_string()),
        }
    }
}
