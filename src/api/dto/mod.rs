//! Data Transfer Objects for request parameter extraction.

pub mod journal_dto;

pub use journal_dto::*;
