pub mod create_patient;
pub mod delete_patient;
pub mod get_patient;
pub mod list_patients;
pub mod search_patients;
pub mod update_patient;

pub use create_patient::create_patient;
pub use delete_patient::delete_patient;
pub use get_patient::get_patient;
pub use list_patients::list_patients;
pub use search_patients::search_patients;
pub use update_patient::update_patient;
