//! Domain entities and value objects for the clip catalog.

pub mod observation;
pub mod post;
pub mod types;
