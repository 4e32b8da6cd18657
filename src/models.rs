pub mod field;
pub mod result;
