//! One service per application module.
//!
//! Services are thin by design: validate, call the repository, translate
//! errors. The exceptions are the places where the database and the
//! filesystem (or a subprocess) must move together: attaching documents,
//! hard-deleting processes, launching liquidators.

pub mod accounting;
pub mod actuaciones;
pub mod calendar;
pub mod clients;
pub mod documents;
pub mod liquidators;
pub mod notifications;
pub mod processes;
pub mod robot;
pub mod trash;
pub mod users;

pub use accounting::AccountingService;
pub use actuaciones::ActuacionService;
pub use calendar::CalendarService;
pub use clients::ClientService;
pub use documents::DocumentService;
pub use liquidators::LiquidatorService;
pub use notifications::NotificationService;
pub use processes::ProcessService;
pub use robot::RobotSearchService;
pub use trash::TrashService;
pub use users::UserService;
