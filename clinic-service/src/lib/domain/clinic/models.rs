use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::identity::models::EmailAddress;

/// Address unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressId(pub i64);

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Patient unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatientId(pub i64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Dentist unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DentistId(pub i64);

impl fmt::Display for DentistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Surgery unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurgeryId(pub i64);

impl fmt::Display for SurgeryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Appointment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentId(pub i64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Postal address shared by patients and dentists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Data for creating or replacing an address
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Patient record.
///
/// Reads embed the linked address when one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

/// Data for creating or replacing a patient
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
    pub address_id: Option<AddressId>,
}

/// Dentist record.
///
/// Reads embed the linked address when one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dentist {
    pub id: DentistId,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

/// Data for creating or replacing a dentist
#[derive(Debug, Clone)]
pub struct NewDentist {
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
    pub address_id: Option<AddressId>,
}

/// Surgery (treatment) offered by the clinic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surgery {
    pub id: SurgeryId,
    pub title: String,
    pub description: Option<String>,
}

/// Data for creating or replacing a surgery
#[derive(Debug, Clone)]
pub struct NewSurgery {
    pub title: String,
    pub description: Option<String>,
}

/// Scheduled appointment between a patient and a dentist.
///
/// The surgery reference is optional and survives as `None` when the
/// referenced surgery is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub dentist_id: DentistId,
    pub surgery_id: Option<SurgeryId>,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Data for creating or replacing an appointment
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: PatientId,
    pub dentist_id: DentistId,
    pub surgery_id: Option<SurgeryId>,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}
