//! Delivery note domain: form state, lookup lists, records and documents

pub mod model;
pub mod repository;
pub mod service;
