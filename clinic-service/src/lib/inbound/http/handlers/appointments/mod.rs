pub mod create_appointment;
pub mod delete_appointment;
pub mod get_appointment;
pub mod list_appointments;
pub mod update_appointment;

pub use create_appointment::create_appointment;
pub use delete_appointment::delete_appointment;
pub use get_appointment::get_appointment;
pub use list_appointments::list_appointments;
pub use update_appointment::update_appointment;
