//! REST API layer for the setup page

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
