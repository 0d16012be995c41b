pub mod clauses;
pub mod error;
pub mod generator;
pub mod resolve;
pub mod schema;
pub mod validate;
