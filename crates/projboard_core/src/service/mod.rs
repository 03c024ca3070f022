//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store mutation into use-case level
//!   APIs.
//! - Keep input surfaces (CLI, UI shells) decoupled from rule details.

pub mod intake;
