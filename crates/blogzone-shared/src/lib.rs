//! # Blog Zone Shared
//!
//! Request/response contracts of the HTTP API.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
