pub mod loader;
pub mod preview;
