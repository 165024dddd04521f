//! Diesel models mirroring the database schema.

#[cfg(feature = "server")]
pub mod config;
pub mod observation;
pub mod post;
