//! # Blog Zone Core
//!
//! The domain layer of the Blog Zone backend.
//! Entities, error types and the ports that storage and token services implement.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
