pub mod sprint_repository;
