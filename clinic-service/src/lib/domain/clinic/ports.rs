use async_trait::async_trait;

use crate::clinic::errors::ClinicError;
use crate::domain::clinic::models::Address;
use crate::domain::clinic::models::AddressId;
use crate::domain::clinic::models::Appointment;
use crate::domain::clinic::models::AppointmentId;
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

/// Persistence operations for clinic records.
///
/// Conventions shared by every entity:
/// * `find_*_by_id` returns `None` for a missing row.
/// * `update_*` fully replaces the row and returns `None` when it does
///   not exist.
/// * `delete_*` returns whether a row was removed.
/// * Listings come back in the entity's natural order: patients and
///   dentists by last name, addresses by city, appointments by
///   scheduled time.
///
/// All methods can fail with `DatabaseError`; writes can additionally
/// fail with `EmailAlreadyExists` or `InvalidReference` where the
/// entity has a unique email or foreign ids.
#[async_trait]
pub trait ClinicRepository: Send + Sync + 'static {
    async fn create_patient(&self, patient: NewPatient) -> Result<Patient, ClinicError>;

    async fn find_patient_by_id(&self, id: &PatientId) -> Result<Option<Patient>, ClinicError>;

    async fn list_patients(&self) -> Result<Vec<Patient>, ClinicError>;

    /// Case-insensitive substring search over first name, last name,
    /// email and phone.
    async fn search_patients(&self, term: &str) -> Result<Vec<Patient>, ClinicError>;

    async fn update_patient(
        &self,
        id: &PatientId,
        patient: NewPatient,
    ) -> Result<Option<Patient>, ClinicError>;

    async fn delete_patient(&self, id: &PatientId) -> Result<bool, ClinicError>;

    async fn create_dentist(&self, dentist: NewDentist) -> Result<Dentist, ClinicError>;

    async fn find_dentist_by_id(&self, id: &DentistId) -> Result<Option<Dentist>, ClinicError>;

    async fn list_dentists(&self) -> Result<Vec<Dentist>, ClinicError>;

    async fn update_dentist(
        &self,
        id: &DentistId,
        dentist: NewDentist,
    ) -> Result<Option<Dentist>, ClinicError>;

    async fn delete_dentist(&self, id: &DentistId) -> Result<bool, ClinicError>;

    async fn create_surgery(&self, surgery: NewSurgery) -> Result<Surgery, ClinicError>;

    async fn find_surgery_by_id(&self, id: &SurgeryId) -> Result<Option<Surgery>, ClinicError>;

    async fn list_surgeries(&self) -> Result<Vec<Surgery>, ClinicError>;

    async fn update_surgery(
        &self,
        id: &SurgeryId,
        surgery: NewSurgery,
    ) -> Result<Option<Surgery>, ClinicError>;

    async fn delete_surgery(&self, id: &SurgeryId) -> Result<bool, ClinicError>;

    async fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, ClinicError>;

    async fn find_appointment_by_id(
        &self,
        id: &AppointmentId,
    ) -> Result<Option<Appointment>, ClinicError>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>, ClinicError>;

    async fn update_appointment(
        &self,
        id: &AppointmentId,
        appointment: NewAppointment,
    ) -> Result<Option<Appointment>, ClinicError>;

    async fn delete_appointment(&self, id: &AppointmentId) -> Result<bool, ClinicError>;

    async fn create_address(&self, address: NewAddress) -> Result<Address, ClinicError>;

    async fn find_address_by_id(&self, id: &AddressId) -> Result<Option<Address>, ClinicError>;

    async fn list_addresses(&self) -> Result<Vec<Address>, ClinicError>;

    async fn update_address(
        &self,
        id: &AddressId,
        address: NewAddress,
    ) -> Result<Option<Address>, ClinicError>;

    async fn delete_address(&self, id: &AddressId) -> Result<bool, ClinicError>;
}
