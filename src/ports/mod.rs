//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SprintStore` - Durable persistence of the sprint snapshot
//! - `FrameworkRecommender` - The external semantic-search service
//! - `IntakeChat` - The streaming chat collaborator used during intake

mod intake_chat;
mod recommender;
mod sprint_store;

pub use intake_chat::{ChatError, IntakeChat, IntakePhase, MessagePart, MessageStream};
pub use recommender::{
    FrameworkRecommender, RecommendationError, RecommendationFilters, RecommendationRequest,
};
pub use sprint_store::{SprintStore, SprintStoreError};
