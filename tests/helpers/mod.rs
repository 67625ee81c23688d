#![allow(unused_imports, dead_code)]
pub mod holiday_helpers;
pub mod test_db;

pub use holiday_helpers::*;
pub use test_db::*;
