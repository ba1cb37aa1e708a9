/// Largest page `GET /sprints` will return.
pub const MAX_PAGE_SIZE: i64 = 10;

/// Page size used whenever the requested count is out of range.
pub const DEFAULT_PAGE_SIZE: i64 = MAX_PAGE_SIZE;

/// An offset/limit window over the sprints table, always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintPage {
    start: i64,
    count: i64,
}

impl SprintPage {
    /// Clamp a requested window: a count outside `1..=10` becomes 10 and a
    /// negative start becomes 0. Never fails.
    pub fn clamped(start: i64, count: i64) -> Self {
        let count = if (1..=MAX_PAGE_SIZE).contains(&count) {
            count
        } else {
            DEFAULT_PAGE_SIZE
        };

        Self {
            start: start.max(0),
            count,
        }
    }

    /// Build a window from raw query values. Missing or non-integer values
    /// count as 0 before clamping.
    pub fn from_query(start: Option<&str>, count: Option<&str>) -> Self {
        Self::clamped(lenient_int(start), lenient_int(count))
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

impl Default for SprintPage {
    fn default() -> Self {
        Self::clamped(0, 0)
    }
}

fn lenient_int(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}
