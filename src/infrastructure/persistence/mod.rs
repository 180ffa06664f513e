//! Concrete repository implementations.

pub mod json_link_repository;

pub use json_link_repository::JsonLinkRepository;
