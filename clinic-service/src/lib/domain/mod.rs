pub mod clinic;
pub mod identity;
