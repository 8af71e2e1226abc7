pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database_pool::{begin_write, create_in_memory_pool, create_pool};
pub use error::{DbError, Result};
pub use repositories::activity_log_repository::ActivityLogRepository;
pub use repositories::applicatie_repository::ApplicatieRepository;
pub use repositories::issue_repository::{IssuePage, IssueRepository};

use sqlx::migrate::Migrator;

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
