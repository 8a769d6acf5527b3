pub mod dto;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod openapi;
pub mod routes;

pub use envelope::{ApiResponse, ErrorResponse};
