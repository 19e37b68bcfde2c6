//! medisight-core
//!
//! Pure domain types shared by every Medisight crate: severity levels,
//! health responses, consultation records and their analysis.
//! No async runtime dependency.

pub mod error;
pub mod models;
