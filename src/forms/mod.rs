//! Request forms with validation and typed payload conversion.

pub mod posts;
