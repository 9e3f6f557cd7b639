pub mod label;
pub mod table;
