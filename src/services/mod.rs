pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod errors;
pub mod posts;
pub mod tags;
