pub mod loader;
pub mod schema;

pub use loader::{ConfigError, ConfigLoader};
