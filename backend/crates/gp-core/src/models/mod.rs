pub mod sprint;
pub mod sprint_id;
pub mod sprint_page;
