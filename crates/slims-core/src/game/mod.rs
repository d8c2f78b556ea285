mod field;
mod schema;
pub mod tables;
mod variant;

pub use field::*;
pub use schema::*;
pub use variant::*;
