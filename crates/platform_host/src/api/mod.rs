//! Backend REST API contracts: endpoints, wire records, and the request service trait.

pub mod endpoint;
pub mod records;
pub mod service;
