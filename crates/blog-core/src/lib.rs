//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the `Post` entity and the store port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
