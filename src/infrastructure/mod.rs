//! Infrastructure layer: persistence and other external integrations.

pub mod persistence;
