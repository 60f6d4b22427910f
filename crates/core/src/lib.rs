//! Domain core for the causa case-management suite.
//!
//! This crate has zero internal dependencies so it can be used by the
//! persistence layer, the logic layer, and any future tooling alike. It
//! holds the shared row-id/timestamp types, the domain error type, field
//! validation rules, the client-keyed document file store, content hashing,
//! calendar/reminder arithmetic, and the liquidator launch engine.

pub mod calendar;
pub mod error;
pub mod hashing;
pub mod launch;
pub mod store;
pub mod types;
pub mod validation;
