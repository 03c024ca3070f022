//! Domain model for tracked projects.
//!
//! # Responsibility
//! - Define the canonical project record shared by the store and all
//!   rendering adapters.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Project fields are fixed at creation; no update or delete
//!   operation exists anywhere in core.

pub mod project;
