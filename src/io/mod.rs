//! I/O modules for page layout loading.

pub mod file_loader;
pub mod async_loader;

// Re-export commonly used types
pub use file_loader::load_layout;
pub use async_loader::{AsyncLoader, LoadResult};
