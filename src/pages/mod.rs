pub mod generation;
pub mod home;
pub mod import;
pub mod not_found;
pub mod studio;
