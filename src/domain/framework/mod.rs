//! Mental-model framework catalog types.
//!
//! Frameworks are immutable reference data owned by the external
//! recommendation service; the engine only selects among them by id.

mod catalog;
mod query;

pub use catalog::Framework;
pub use query::{
    build_recommendation_query, detect_problem_categories, RecommendationQuery, MAX_QUERY_LENGTH,
};
