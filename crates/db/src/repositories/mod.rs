//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Reads exclude
//! soft-deleted rows unless the method name says otherwise.

pub mod accounting_entry_repo;
pub mod accounting_type_repo;
pub mod actuacion_repo;
pub mod client_repo;
pub mod document_repo;
pub mod event_repo;
pub mod liquidator_repo;
pub mod notification_repo;
pub mod process_repo;
pub mod robot_search_repo;
pub mod trash_repo;
pub mod user_repo;

pub use accounting_entry_repo::AccountingEntryRepo;
pub use accounting_type_repo::AccountingTypeRepo;
pub use actuacion_repo::ActuacionRepo;
pub use client_repo::ClientRepo;
pub use document_repo::DocumentRepo;
pub use event_repo::EventRepo;
pub use liquidator_repo::LiquidatorRepo;
pub use notification_repo::NotificationRepo;
pub use process_repo::ProcessRepo;
pub use robot_search_repo::RobotSearchRepo;
pub use trash_repo::TrashRepo;
pub use user_repo::UserRepo;
