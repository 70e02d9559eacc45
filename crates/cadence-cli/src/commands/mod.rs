pub mod generate;
pub mod label;
pub mod validate;
