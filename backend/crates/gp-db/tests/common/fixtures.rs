use gp_core::Sprint;

/// Creates a test Sprint with sensible defaults
pub fn create_test_sprint(index: usize) -> Sprint {
    Sprint::new(format!("Sprint {}", index), "2018-01-01", "2018-02-01")
}
