use serde::Serialize;

/// Body of a successful `DELETE /sprint/{id}`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
