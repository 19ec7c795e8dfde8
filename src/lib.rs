pub mod errors;
pub mod exec;
pub mod instruction;
