//! Adapters - Implementations of the ports.

pub mod chat;
pub mod document;
pub mod recommendation;
pub mod storage;
