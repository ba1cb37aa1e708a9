mod sprint_id;
mod sprint_page;
