pub mod holiday_repository;

pub use holiday_repository::*;
