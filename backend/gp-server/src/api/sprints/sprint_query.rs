use gp_core::SprintPage;

/// Raw `GET /sprints` query pairs, in request order.
///
/// Kept as pairs rather than a struct so that a repeated key resolves to its
/// first occurrence and a malformed value is clamped instead of rejected.
#[derive(Debug, Default)]
pub struct SprintQuery(pub Vec<(String, String)>);

impl SprintQuery {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn page(&self) -> SprintPage {
        SprintPage::from_query(self.first("start"), self.first("count"))
    }
}
