pub mod create_address;
pub mod delete_address;
pub mod get_address;
pub mod list_addresses;
pub mod update_address;

pub use create_address::create_address;
pub use delete_address::delete_address;
pub use get_address::get_address;
pub use list_addresses::list_addresses;
pub use update_address::update_address;
