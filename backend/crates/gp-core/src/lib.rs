pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::sprint::{MAX_NAME_LENGTH, Sprint};
pub use models::sprint_id::parse_sprint_id;
pub use models::sprint_page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, SprintPage};
