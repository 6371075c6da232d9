//! Application layer - orchestration services.
//!
//! Services coordinate the domain engine with the ports; they own no
//! business rules themselves.

mod sprint_service;

pub use sprint_service::SprintService;
