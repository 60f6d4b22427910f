//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod accounting;
pub mod actuacion;
pub mod client;
pub mod document;
pub mod event;
pub mod liquidator;
pub mod notification;
pub mod process;
pub mod robot_search;
pub mod user;
