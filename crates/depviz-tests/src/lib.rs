pub mod fixtures;
pub mod test_env;

// Re-export key testing utilities
pub use fixtures::{NuspecBuilder, index_json};
pub use test_env::TestEnvironment;
