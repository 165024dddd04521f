//! Core library exports for the cliplog service.
//!
//! This crate exposes the domain model, Diesel-backed repositories, service
//! layer and HTTP routes of a bookmark ("clip") catalog: clips are saved with
//! title, category, description and tags, then browsed by recency, searched
//! by escaped free-text keywords, and offered a category ordering ranked by
//! an origin domain's posting history.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
