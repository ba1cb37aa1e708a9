pub mod sprint_error;
pub mod sprint_service;
