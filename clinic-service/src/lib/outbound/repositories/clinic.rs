/*!
   Clinic records repository backed by sqlite.

   Patients and dentists are read with their address joined in; the
   embedded address columns are NULL when no address is linked.
*/

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::SqlitePool;

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
use crate::domain::clinic::ports::ClinicRepository;
use crate::identity::models::EmailAddress;

pub struct SqliteClinicRepository {
    pool: SqlitePool,
}

impl SqliteClinicRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AddressRow {
    id: i64,
    street: String,
    city: String,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: AddressId(row.id),
            street: row.street,
            city: row.city,
            state: row.state,
            postal_code: row.postal_code,
            country: row.country,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PatientRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    address_id: Option<i64>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl PatientRow {
    fn try_into_patient(self) -> Result<Patient, ClinicError> {
        Ok(Patient {
            id: PatientId(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email.map(EmailAddress::new).transpose()?,
            phone: self.phone,
            address: joined_address(
                self.address_id,
                self.street,
                self.city,
                self.state,
                self.postal_code,
                self.country,
            ),
        })
    }
}

#[derive(sqlx::FromRow)]
struct DentistRow {
    id: i64,
    first_name: String,
    last_name: String,
    specialty: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address_id: Option<i64>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl DentistRow {
    fn try_into_dentist(self) -> Result<Dentist, ClinicError> {
        Ok(Dentist {
            id: DentistId(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            specialty: self.specialty,
            email: self.email.map(EmailAddress::new).transpose()?,
            phone: self.phone,
            address: joined_address(
                self.address_id,
                self.street,
                self.city,
                self.state,
                self.postal_code,
                self.country,
            ),
        })
    }
}

#[derive(sqlx::FromRow)]
struct SurgeryRow {
    id: i64,
    title: String,
    description: Option<String>,
}

impl From<SurgeryRow> for Surgery {
    fn from(row: SurgeryRow) -> Self {
        Self {
            id: SurgeryId(row.id),
            title: row.title,
            description: row.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AppointmentRow {
    id: i64,
    patient_id: i64,
    dentist_id: i64,
    surgery_id: Option<i64>,
    scheduled_at: DateTime<Utc>,
    notes: Option<String>,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: AppointmentId(row.id),
            patient_id: PatientId(row.patient_id),
            dentist_id: DentistId(row.dentist_id),
            surgery_id: row.surgery_id.map(SurgeryId),
            scheduled_at: row.scheduled_at,
            notes: row.notes,
        }
    }
}

/// Builds the embedded address from joined columns; all of them are
/// NULL when the record has no linked address.
fn joined_address(
    id: Option<i64>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
) -> Option<Address> {
    match (id, street, city) {
        (Some(id), Some(street), Some(city)) => Some(Address {
            id: AddressId(id),
            street,
            city,
            state,
            postal_code,
            country,
        }),
        _ => None,
    }
}

fn patient_write_error(e: sqlx::Error, email: Option<&EmailAddress>) -> ClinicError {
    if let Some(db_err) = e.as_database_error() {
        // sqlite reports the violated column as "<table>.<column>"
        if db_err.is_unique_violation() && db_err.message().contains("patients.email") {
            let email = email.map(|email| email.as_str().to_string()).unwrap_or_default();
            return ClinicError::EmailAlreadyExists(email);
        }
        if db_err.is_foreign_key_violation() {
            return ClinicError::InvalidReference(
                "address_id does not reference an existing address".to_string(),
            );
        }
    }
    ClinicError::DatabaseError(e.to_string())
}

fn dentist_write_error(e: sqlx::Error, email: Option<&EmailAddress>) -> ClinicError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.message().contains("dentists.email") {
            let email = email.map(|email| email.as_str().to_string()).unwrap_or_default();
            return ClinicError::EmailAlreadyExists(email);
        }
        if db_err.is_foreign_key_violation() {
            return ClinicError::InvalidReference(
                "address_id does not reference an existing address".to_string(),
            );
        }
    }
    ClinicError::DatabaseError(e.to_string())
}

fn appointment_write_error(e: sqlx::Error) -> ClinicError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return ClinicError::InvalidReference(
                "patient_id, dentist_id or surgery_id does not reference an existing record"
                    .to_string(),
            );
        }
    }
    ClinicError::DatabaseError(e.to_string())
}

#[async_trait]
impl ClinicRepository for SqliteClinicRepository {
    async fn create_patient(&self, patient: NewPatient) -> Result<Patient, ClinicError> {
        let result = sqlx::query(
            r#"
            INSERT INTO patients (first_name, last_name, email, phone, address_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(patient.email.as_ref().map(|email| email.as_str()))
        .bind(&patient.phone)
        .bind(patient.address_id.map(|id| id.0))
        .execute(&self.pool)
        .await
        .map_err(|e| patient_write_error(e, patient.email.as_ref()))?;

        let id = result.last_insert_rowid();

        self.find_patient_by_id(&PatientId(id))
            .await?
            .ok_or_else(|| ClinicError::Unknown(format!("Patient {} missing after insert", id)))
    }

    async fn find_patient_by_id(&self, id: &PatientId) -> Result<Option<Patient>, ClinicError> {
        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT p.id, p.first_name, p.last_name, p.email, p.phone,
                   a.id AS address_id, a.street, a.city, a.state, a.postal_code, a.country
            FROM patients p
            LEFT JOIN addresses a ON a.id = p.address_id
            WHERE p.id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        row.map(PatientRow::try_into_patient).transpose()
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, ClinicError> {
        let rows = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT p.id, p.first_name, p.last_name, p.email, p.phone,
                   a.id AS address_id, a.street, a.city, a.state, a.postal_code, a.country
            FROM patients p
            LEFT JOIN addresses a ON a.id = p.address_id
            ORDER BY p.last_name ASC, p.first_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(PatientRow::try_into_patient).collect()
    }

    async fn search_patients(&self, term: &str) -> Result<Vec<Patient>, ClinicError> {
        // sqlite LIKE is case-insensitive for ASCII.
        let pattern = format!("%{}%", term);

        let rows = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT p.id, p.first_name, p.last_name, p.email, p.phone,
                   a.id AS address_id, a.street, a.city, a.state, a.postal_code, a.country
            FROM patients p
            LEFT JOIN addresses a ON a.id = p.address_id
            WHERE p.first_name LIKE ? OR p.last_name LIKE ? OR p.email LIKE ? OR p.phone LIKE ?
            ORDER BY p.last_name ASC, p.first_name ASC
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(PatientRow::try_into_patient).collect()
    }

    async fn update_patient(
        &self,
        id: &PatientId,
        patient: NewPatient,
    ) -> Result<Option<Patient>, ClinicError> {
        let result = sqlx::query(
            r#"
            UPDATE patients
            SET first_name = ?, last_name = ?, email = ?, phone = ?, address_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(patient.email.as_ref().map(|email| email.as_str()))
        .bind(&patient.phone)
        .bind(patient.address_id.map(|id| id.0))
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| patient_write_error(e, patient.email.as_ref()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_patient_by_id(id).await
    }

    async fn delete_patient(&self, id: &PatientId) -> Result<bool, ClinicError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_dentist(&self, dentist: NewDentist) -> Result<Dentist, ClinicError> {
        let result = sqlx::query(
            r#"
            INSERT INTO dentists (first_name, last_name, specialty, email, phone, address_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&dentist.first_name)
        .bind(&dentist.last_name)
        .bind(&dentist.specialty)
        .bind(dentist.email.as_ref().map(|email| email.as_str()))
        .bind(&dentist.phone)
        .bind(dentist.address_id.map(|id| id.0))
        .execute(&self.pool)
        .await
        .map_err(|e| dentist_write_error(e, dentist.email.as_ref()))?;

        let id = result.last_insert_rowid();

        self.find_dentist_by_id(&DentistId(id))
            .await?
            .ok_or_else(|| ClinicError::Unknown(format!("Dentist {} missing after insert", id)))
    }

    async fn find_dentist_by_id(&self, id: &DentistId) -> Result<Option<Dentist>, ClinicError> {
        let row = sqlx::query_as::<_, DentistRow>(
            r#"
            SELECT d.id, d.first_name, d.last_name, d.specialty, d.email, d.phone,
                   a.id AS address_id, a.street, a.city, a.state, a.postal_code, a.country
            FROM dentists d
            LEFT JOIN addresses a ON a.id = d.address_id
            WHERE d.id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        row.map(DentistRow::try_into_dentist).transpose()
    }

    async fn list_dentists(&self) -> Result<Vec<Dentist>, ClinicError> {
        let rows = sqlx::query_as::<_, DentistRow>(
            r#"
            SELECT d.id, d.first_name, d.last_name, d.specialty, d.email, d.phone,
                   a.id AS address_id, a.street, a.city, a.state, a.postal_code, a.country
            FROM dentists d
            LEFT JOIN addresses a ON a.id = d.address_id
            ORDER BY d.last_name ASC, d.first_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(DentistRow::try_into_dentist).collect()
    }

    async fn update_dentist(
        &self,
        id: &DentistId,
        dentist: NewDentist,
    ) -> Result<Option<Dentist>, ClinicError> {
        let result = sqlx::query(
            r#"
            UPDATE dentists
            SET first_name = ?, last_name = ?, specialty = ?, email = ?, phone = ?, address_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&dentist.first_name)
        .bind(&dentist.last_name)
        .bind(&dentist.specialty)
        .bind(dentist.email.as_ref().map(|email| email.as_str()))
        .bind(&dentist.phone)
        .bind(dentist.address_id.map(|id| id.0))
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| dentist_write_error(e, dentist.email.as_ref()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_dentist_by_id(id).await
    }

    async fn delete_dentist(&self, id: &DentistId) -> Result<bool, ClinicError> {
        let result = sqlx::query("DELETE FROM dentists WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_surgery(&self, surgery: NewSurgery) -> Result<Surgery, ClinicError> {
        let result = sqlx::query(
            r#"
            INSERT INTO surgeries (title, description)
            VALUES (?, ?)
            "#,
        )
        .bind(&surgery.title)
        .bind(&surgery.description)
        .execute(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        let id = result.last_insert_rowid();

        self.find_surgery_by_id(&SurgeryId(id))
            .await?
            .ok_or_else(|| ClinicError::Unknown(format!("Surgery {} missing after insert", id)))
    }

    async fn find_surgery_by_id(&self, id: &SurgeryId) -> Result<Option<Surgery>, ClinicError> {
        let row = sqlx::query_as::<_, SurgeryRow>(
            r#"
            SELECT id, title, description
            FROM surgeries
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(row.map(Surgery::from))
    }

    async fn list_surgeries(&self) -> Result<Vec<Surgery>, ClinicError> {
        let rows = sqlx::query_as::<_, SurgeryRow>(
            r#"
            SELECT id, title, description
            FROM surgeries
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Surgery::from).collect())
    }

    async fn update_surgery(
        &self,
        id: &SurgeryId,
        surgery: NewSurgery,
    ) -> Result<Option<Surgery>, ClinicError> {
        let result = sqlx::query(
            r#"
            UPDATE surgeries
            SET title = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&surgery.title)
        .bind(&surgery.description)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_surgery_by_id(id).await
    }

    async fn delete_surgery(&self, id: &SurgeryId) -> Result<bool, ClinicError> {
        let result = sqlx::query("DELETE FROM surgeries WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, ClinicError> {
        let result = sqlx::query(
            r#"
            INSERT INTO appointments (patient_id, dentist_id, surgery_id, scheduled_at, notes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(appointment.patient_id.0)
        .bind(appointment.dentist_id.0)
        .bind(appointment.surgery_id.map(|id| id.0))
        .bind(appointment.scheduled_at)
        .bind(&appointment.notes)
        .execute(&self.pool)
        .await
        .map_err(appointment_write_error)?;

        let id = result.last_insert_rowid();

        self.find_appointment_by_id(&AppointmentId(id))
            .await?
            .ok_or_else(|| {
                ClinicError::Unknown(format!("Appointment {} missing after insert", id))
            })
    }

    async fn find_appointment_by_id(
        &self,
        id: &AppointmentId,
    ) -> Result<Option<Appointment>, ClinicError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r#"
            SELECT id, patient_id, dentist_id, surgery_id, scheduled_at, notes
            FROM appointments
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(row.map(Appointment::from))
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, ClinicError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            r#"
            SELECT id, patient_id, dentist_id, surgery_id, scheduled_at, notes
            FROM appointments
            ORDER BY scheduled_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn update_appointment(
        &self,
        id: &AppointmentId,
        appointment: NewAppointment,
    ) -> Result<Option<Appointment>, ClinicError> {
        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET patient_id = ?, dentist_id = ?, surgery_id = ?, scheduled_at = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(appointment.patient_id.0)
        .bind(appointment.dentist_id.0)
        .bind(appointment.surgery_id.map(|id| id.0))
        .bind(appointment.scheduled_at)
        .bind(&appointment.notes)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(appointment_write_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_appointment_by_id(id).await
    }

    async fn delete_appointment(&self, id: &AppointmentId) -> Result<bool, ClinicError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_address(&self, address: NewAddress) -> Result<Address, ClinicError> {
        let result = sqlx::query(
            r#"
            INSERT INTO addresses (street, city, state, postal_code, country)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(&address.country)
        .execute(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        let id = result.last_insert_rowid();

        self.find_address_by_id(&AddressId(id))
            .await?
            .ok_or_else(|| ClinicError::Unknown(format!("Address {} missing after insert", id)))
    }

    async fn find_address_by_id(&self, id: &AddressId) -> Result<Option<Address>, ClinicError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT id, street, city, state, postal_code, country
            FROM addresses
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(row.map(Address::from))
    }

    async fn list_addresses(&self) -> Result<Vec<Address>, ClinicError> {
        let rows = sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT id, street, city, state, postal_code, country
            FROM addresses
            ORDER BY city ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Address::from).collect())
    }

    async fn update_address(
        &self,
        id: &AddressId,
        address: NewAddress,
    ) -> Result<Option<Address>, ClinicError> {
        let result = sqlx::query(
            r#"
            UPDATE addresses
            SET street = ?, city = ?, state = ?, postal_code = ?, country = ?
            WHERE id = ?
            "#,
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(&address.country)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_address_by_id(id).await
    }

    async fn delete_address(&self, id: &AddressId) -> Result<bool, ClinicError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ClinicError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
