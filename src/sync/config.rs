pub mod client {
    use std::time::Duration;
    pub const USER_AGENT: &str = "Mozilla/5.0";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const DEFAULT_BASE_URL: &str = "https://leetcode.com";
    pub const GRAPHQL_PATH: &str = "/graphql";
}
pub mod lister {
    use std::time::Duration;
    pub const PAGE_SIZE: usize = 20;
    pub const PAGE_DELAY: Duration = Duration::from_millis(500);
    pub const REST_PATH: &str = "/api/submissions/";
}
pub mod materializer {
    use std::time::Duration;
    pub const WRITE_DELAY: Duration = Duration::from_millis(300);
    pub const SOLUTION_STEM: &str = "solution";
    pub const FALLBACK_EXTENSION: &str = "txt";
}
pub mod settings {
    pub const DEFAULT_LANGUAGE: &str = "cpp";
    pub const DEFAULT_OUTPUT_ROOT: &str = "solutions";
    pub const DEFAULT_README: &str = "README.md";
}
