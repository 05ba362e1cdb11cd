pub mod create_dentist;
pub mod delete_dentist;
pub mod get_dentist;
pub mod list_dentists;
pub mod update_dentist;

pub use create_dentist::create_dentist;
pub use delete_dentist::delete_dentist;
pub use get_dentist::get_dentist;
pub use list_dentists::list_dentists;
pub use update_dentist::update_dentist;
