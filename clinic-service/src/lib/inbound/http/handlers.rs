use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::clinic::errors::ClinicError;
use crate::domain::clinic::models::Address;
use crate::domain::clinic::models::AddressId;
use crate::domain::clinic::models::Appointment;
use crate::domain::clinic::models::Dentist;
use crate::domain::clinic::models::DentistId;
use crate::domain::clinic::models::NewAddress;
use crate::domain::clinic::models::NewAppointment;
use crate::domain::clinic::models::NewDentist;
use crate::domain::clinic::models::NewPatient;
use crate::domain::clinic::models::NewSurgery;
use crate::domain::clinic::models::Patient;
use crate::domain::clinic::models::PatientId;
use crate::domain::clinic::models::Surgery;
use crate::domain::clinic::models::SurgeryId;
use crate::identity::errors::EmailError;
use crate::identity::errors::IdentityError;
use crate::identity::models::EmailAddress;

pub mod addresses;
pub mod appointments;
pub mod dentists;
pub mod issue_token;
pub mod patients;
pub mod register;
pub mod surgeries;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotFound(_) => ApiError::NotFound(err.to_string()),
            IdentityError::UsernameAlreadyExists(_) | IdentityError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            IdentityError::Unauthenticated => ApiError::Unauthorized(err.to_string()),
            IdentityError::Forbidden => ApiError::Forbidden(err.to_string()),
            IdentityError::InvalidUsername(_) | IdentityError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            IdentityError::DatabaseError(_) | IdentityError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ClinicError> for ApiError {
    fn from(err: ClinicError) -> Self {
        match err {
            ClinicError::PatientNotFound
            | ClinicError::DentistNotFound
            | ClinicError::SurgeryNotFound
            | ClinicError::AppointmentNotFound
            | ClinicError::AddressNotFound => ApiError::NotFound(err.to_string()),
            ClinicError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            ClinicError::InvalidReference(_) => ApiError::BadRequest(err.to_string()),
            ClinicError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            ClinicError::DatabaseError(_) | ClinicError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        ApiError::UnprocessableEntity(format!("Invalid email: {}", err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

// Response bodies shared by the create, read and update operations of
// each entity.

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressData {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl From<&Address> for AddressData {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.0,
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<AddressData>,
}

impl From<&Patient> for PatientData {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.0,
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            email: patient.email.as_ref().map(|email| email.as_str().to_string()),
            phone: patient.phone.clone(),
            address: patient.address.as_ref().map(AddressData::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DentistData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<AddressData>,
}

impl From<&Dentist> for DentistData {
    fn from(dentist: &Dentist) -> Self {
        Self {
            id: dentist.id.0,
            first_name: dentist.first_name.clone(),
            last_name: dentist.last_name.clone(),
            specialty: dentist.specialty.clone(),
            email: dentist.email.as_ref().map(|email| email.as_str().to_string()),
            phone: dentist.phone.clone(),
            address: dentist.address.as_ref().map(AddressData::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurgeryData {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

impl From<&Surgery> for SurgeryData {
    fn from(surgery: &Surgery) -> Self {
        Self {
            id: surgery.id.0,
            title: surgery.title.clone(),
            description: surgery.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentData {
    pub id: i64,
    pub patient_id: i64,
    pub dentist_id: i64,
    pub surgery_id: Option<i64>,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl From<&Appointment> for AppointmentData {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.0,
            patient_id: appointment.patient_id.0,
            dentist_id: appointment.dentist_id.0,
            surgery_id: appointment.surgery_id.map(|id| id.0),
            scheduled_at: appointment.scheduled_at,
            notes: appointment.notes.clone(),
        }
    }
}

// Request bodies shared by each entity's create and replace
// operations. Emails are the only field needing validation beyond
// deserialization.

#[derive(Debug, Clone, Deserialize)]
pub struct PatientRequestBody {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_id: Option<i64>,
}

impl PatientRequestBody {
    pub fn try_into_new_patient(self) -> Result<NewPatient, EmailError> {
        let email = self.email.map(EmailAddress::new).transpose()?;
        Ok(NewPatient {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            phone: self.phone,
            address_id: self.address_id.map(AddressId),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DentistRequestBody {
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_id: Option<i64>,
}

impl DentistRequestBody {
    pub fn try_into_new_dentist(self) -> Result<NewDentist, EmailError> {
        let email = self.email.map(EmailAddress::new).transpose()?;
        Ok(NewDentist {
            first_name: self.first_name,
            last_name: self.last_name,
            specialty: self.specialty,
            email,
            phone: self.phone,
            address_id: self.address_id.map(AddressId),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurgeryRequestBody {
    pub title: String,
    pub description: Option<String>,
}

impl SurgeryRequestBody {
    pub fn into_new_surgery(self) -> NewSurgery {
        NewSurgery {
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRequestBody {
    pub patient_id: i64,
    pub dentist_id: i64,
    pub surgery_id: Option<i64>,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl AppointmentRequestBody {
    pub fn into_new_appointment(self) -> NewAppointment {
        NewAppointment {
            patient_id: PatientId(self.patient_id),
            dentist_id: DentistId(self.dentist_id),
            surgery_id: self.surgery_id.map(SurgeryId),
            scheduled_at: self.scheduled_at,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressRequestBody {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl AddressRequestBody {
    pub fn into_new_address(self) -> NewAddress {
        NewAddress {
            street: self.street,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            country: self.country,
        }
    }
}
