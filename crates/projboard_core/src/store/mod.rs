//! Observable in-memory project storage.
//!
//! # Responsibility
//! - Hold the authoritative ordered project sequence.
//! - Fan out detached snapshot copies to registered listeners on every
//!   mutation.
//!
//! # Invariants
//! - The project sequence is append-only: entries are never removed,
//!   reordered, or edited.
//! - Listeners run synchronously, in registration order.

pub mod project_store;
