//! Core module containing fundamental traits and types for the store

pub mod entity;
pub mod error;
pub mod service;
pub mod validation;

pub use entity::Record;
pub use error::{ErrorResponse, StoreError, ValidationError};
pub use service::RecordService;
