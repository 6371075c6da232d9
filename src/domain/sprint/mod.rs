//! Sprint orchestration.
//!
//! The `SprintEngine` aggregate is the single source of truth for the
//! session, the stage pointer, and all stage artifacts, and enforces
//! forward-progress gating. `SprintSnapshot` is its flat persisted form.

mod engine;
mod snapshot;

pub use engine::{SprintEngine, SprintSession};
pub use snapshot::SprintSnapshot;
