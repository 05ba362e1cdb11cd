use thiserror::Error;

use crate::identity::errors::EmailError;

/// Top-level error for all clinic record operations
#[derive(Debug, Clone, Error)]
pub enum ClinicError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Patient not found")]
    PatientNotFound,

    #[error("Dentist not found")]
    DentistNotFound,

    #[error("Surgery not found")]
    SurgeryNotFound,

    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Address not found")]
    AddressNotFound,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    /// A submitted foreign id does not reference an existing record.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ClinicError {
    fn from(err: anyhow::Error) -> Self {
        ClinicError::Unknown(err.to_string())
    }
}
