pub mod documents;
pub mod manager;

pub use manager::{DatabaseError, DatabaseManager};
