pub mod traits;

// Source implementations
pub mod json;
pub mod memory;
