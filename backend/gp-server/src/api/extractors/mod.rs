pub mod sprint_id;
