pub mod create_surgery;
pub mod delete_surgery;
pub mod get_surgery;
pub mod list_surgeries;
pub mod update_surgery;

pub use create_surgery::create_surgery;
pub use delete_surgery::delete_surgery;
pub use get_surgery::get_surgery;
pub use list_surgeries::list_surgeries;
pub use update_surgery::update_surgery;
