//! Decision Sprint - Guided Decision-Making Engine
//!
//! This crate implements a staged decision sprint: intake, diagnostic
//! interview, classification, problem brief, framework selection and
//! application, and a final commitment memo.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
