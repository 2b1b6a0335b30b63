pub mod education;
pub mod listing;
pub mod profile;
