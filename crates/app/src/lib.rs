//! Logic layer: the seam a desktop shell binds its widgets to.
//!
//! Each module of the application gets one service wrapping the
//! repositories, the document store, the viewer, and the liquidator
//! launcher. Services validate input, translate storage errors into
//! [`error::AppError`], and orchestrate the few places where the database
//! and the filesystem must move together. Nothing here knows about
//! widgets.

pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use state::AppState;
