//! Utility functions shared across layers.
//!
//! - [`validation`] - URL and short id validation

pub mod validation;
