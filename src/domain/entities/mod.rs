//! Core domain entities.
//!
//! The service has a single entity, [`Link`]: the association between an
//! original URL and the numeric short id it was assigned. Links are created
//! once and never updated or deleted.

pub mod link;

pub use link::Link;
