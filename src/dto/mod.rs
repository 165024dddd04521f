//! Response shapes for the JSON API.

pub mod posts;
