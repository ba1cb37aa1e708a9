pub mod delete_response;
pub mod sprint_query;
pub mod sprints;
