pub mod application_service;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
