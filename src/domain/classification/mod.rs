//! Decision classification.
//!
//! A pure, deterministic pipeline: diagnostic answers are projected onto
//! `DecisionFactors` by explicit substring rule tables, and `classify`
//! maps the factors to a binary decision type. Rule order is part of the
//! observable contract; do not reorder the tables.

mod decision_type;
mod engine;
mod factors;

pub use decision_type::DecisionType;
pub use engine::classify;
pub use factors::{Consequences, DecisionFactors, Reversibility, Timeframe};
