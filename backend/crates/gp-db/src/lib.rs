pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

pub use connection::database::{DatabaseLocation, connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::sprint_repository::SprintRepository;
pub use store::SprintStore;
