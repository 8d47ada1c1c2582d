mod collections;
mod documents;
mod schemas;
pub mod utils;

pub use collections::{collection_get, collections_list};
pub use documents::{document_create, document_delete, document_update, document_validate};
pub use schemas::schemas_get;
