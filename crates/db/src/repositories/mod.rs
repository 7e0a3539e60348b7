//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod nameplate_repo;
pub mod notification_repo;
pub mod user_repo;
pub mod verified_nameplate_repo;

pub use dashboard_repo::DashboardRepo;
pub use nameplate_repo::NameplateRepo;
pub use notification_repo::NotificationRepo;
pub use user_repo::UserRepo;
pub use verified_nameplate_repo::VerifiedNameplateRepo;
