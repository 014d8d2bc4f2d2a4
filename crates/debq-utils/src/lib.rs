pub mod loader;
pub mod tracing;
