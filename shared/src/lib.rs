pub mod models;
pub mod object_id;

pub use models::*;
pub use object_id::*;
