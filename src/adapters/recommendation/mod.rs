//! Framework recommender adapters.
//!
//! - `HttpRecommender` - the real semantic-search service over HTTP
//! - `StaticRecommender` - a fixed catalog for tests and the demo binary

mod http;
mod static_catalog;

pub use http::HttpRecommender;
pub use static_catalog::StaticRecommender;
