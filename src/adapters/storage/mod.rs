//! Sprint store adapters.
//!
//! - `InMemorySprintStore` - process-resident, for tests and development
//! - `FileSprintStore` - single JSON file on disk

mod file;
mod in_memory;

pub use file::FileSprintStore;
pub use in_memory::InMemorySprintStore;
