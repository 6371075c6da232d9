//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors, stages)
//! - `diagnostic` - Interview answers and the typed question registry
//! - `classification` - Decision factors and the type-1/type-2 rule
//! - `artifacts` - Problem brief and commitment memo generators
//! - `framework` - Framework catalog types and recommendation queries
//! - `sprint` - The sprint engine aggregate and its persisted snapshot

pub mod artifacts;
pub mod classification;
pub mod diagnostic;
pub mod foundation;
pub mod framework;
pub mod sprint;
