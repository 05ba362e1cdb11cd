use std::sync::Arc;

use crate::clinic::errors::ClinicError;
use crate::clinic::ports::ClinicRepository;
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

/// Domain service for clinic records.
///
/// Thin layer over the repository that turns missing rows into the
/// entity's not-found error. Updates replace the stored record as a
/// whole.
pub struct ClinicService<R>
where
    R: ClinicRepository,
{
    repository: Arc<R>,
}

impl<R> ClinicService<R>
where
    R: ClinicRepository,
{
    /// Create a new clinic service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_patient(&self, patient: NewPatient) -> Result<Patient, ClinicError> {
        self.repository.create_patient(patient).await
    }

    pub async fn get_patient(&self, id: &PatientId) -> Result<Patient, ClinicError> {
        self.repository
            .find_patient_by_id(id)
            .await?
            .ok_or(ClinicError::PatientNotFound)
    }

    pub async fn list_patients(&self) -> Result<Vec<Patient>, ClinicError> {
        self.repository.list_patients().await
    }

    pub async fn search_patients(&self, term: &str) -> Result<Vec<Patient>, ClinicError> {
        self.repository.search_patients(term).await
    }

    pub async fn update_patient(
        &self,
        id: &PatientId,
        patient: NewPatient,
    ) -> Result<Patient, ClinicError> {
        self.repository
            .update_patient(id, patient)
            .await?
            .ok_or(ClinicError::PatientNotFound)
    }

    pub async fn delete_patient(&self, id: &PatientId) -> Result<(), ClinicError> {
        if self.repository.delete_patient(id).await? {
            Ok(())
        } else {
            Err(ClinicError::PatientNotFound)
        }
    }

    pub async fn create_dentist(&self, dentist: NewDentist) -> Result<Dentist, ClinicError> {
        self.repository.create_dentist(dentist).await
    }

    pub async fn get_dentist(&self, id: &DentistId) -> Result<Dentist, ClinicError> {
        self.repository
            .find_dentist_by_id(id)
            .await?
            .ok_or(ClinicError::DentistNotFound)
    }

    pub async fn list_dentists(&self) -> Result<Vec<Dentist>, ClinicError> {
        self.repository.list_dentists().await
    }

    pub async fn update_dentist(
        &self,
        id: &DentistId,
        dentist: NewDentist,
    ) -> Result<Dentist, ClinicError> {
        self.repository
            .update_dentist(id, dentist)
            .await?
            .ok_or(ClinicError::DentistNotFound)
    }

    pub async fn delete_dentist(&self, id: &DentistId) -> Result<(), ClinicError> {
        if self.repository.delete_dentist(id).await? {
            Ok(())
        } else {
            Err(ClinicError::DentistNotFound)
        }
    }

    pub async fn create_surgery(&self, surgery: NewSurgery) -> Result<Surgery, ClinicError> {
        self.repository.create_surgery(surgery).await
    }

    pub async fn get_surgery(&self, id: &SurgeryId) -> Result<Surgery, ClinicError> {
        self.repository
            .find_surgery_by_id(id)
            .await?
            .ok_or(ClinicError::SurgeryNotFound)
    }

    pub async fn list_surgeries(&self) -> Result<Vec<Surgery>, ClinicError> {
        self.repository.list_surgeries().await
    }

    pub async fn update_surgery(
        &self,
        id: &SurgeryId,
        surgery: NewSurgery,
    ) -> Result<Surgery, ClinicError> {
        self.repository
            .update_surgery(id, surgery)
            .await?
            .ok_or(ClinicError::SurgeryNotFound)
    }

    pub async fn delete_surgery(&self, id: &SurgeryId) -> Result<(), ClinicError> {
        if self.repository.delete_surgery(id).await? {
            Ok(())
        } else {
            Err(ClinicError::SurgeryNotFound)
        }
    }

    pub async fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, ClinicError> {
        self.repository.create_appointment(appointment).await
    }

    pub async fn get_appointment(&self, id: &AppointmentId) -> Result<Appointment, ClinicError> {
        self.repository
            .find_appointment_by_id(id)
            .await?
            .ok_or(ClinicError::AppointmentNotFound)
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ClinicError> {
        self.repository.list_appointments().await
    }

    pub async fn update_appointment(
        &self,
        id: &AppointmentId,
        appointment: NewAppointment,
    ) -> Result<Appointment, ClinicError> {
        self.repository
            .update_appointment(id, appointment)
            .await?
            .ok_or(ClinicError::AppointmentNotFound)
    }

    pub async fn delete_appointment(&self, id: &AppointmentId) -> Result<(), ClinicError> {
        if self.repository.delete_appointment(id).await? {
            Ok(())
        } else {
            Err(ClinicError::AppointmentNotFound)
        }
    }

    pub async fn create_address(&self, address: NewAddress) -> Result<Address, ClinicError> {
        self.repository.create_address(address).await
    }

    pub async fn get_address(&self, id: &AddressId) -> Result<Address, ClinicError> {
        self.repository
            .find_address_by_id(id)
            .await?
            .ok_or(ClinicError::AddressNotFound)
    }

    pub async fn list_addresses(&self) -> Result<Vec<Address>, ClinicError> {
        self.repository.list_addresses().await
    }

    pub async fn update_address(
        &self,
        id: &AddressId,
        address: NewAddress,
    ) -> Result<Address, ClinicError> {
        self.repository
            .update_address(id, address)
            .await?
            .ok_or(ClinicError::AddressNotFound)
    }

    pub async fn delete_address(&self, id: &AddressId) -> Result<(), ClinicError> {
        if self.repository.delete_address(id).await? {
            Ok(())
        } else {
            Err(ClinicError::AddressNotFound)
        }
    }
}
