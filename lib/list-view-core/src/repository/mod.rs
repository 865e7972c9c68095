pub mod error;
pub mod record_repository;
