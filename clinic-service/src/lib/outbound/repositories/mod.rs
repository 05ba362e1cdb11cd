pub mod clinic;
pub mod identity;

pub use clinic::SqliteClinicRepository;
pub use identity::SqliteIdentityRepository;
