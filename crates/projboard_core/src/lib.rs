//! Core domain logic for Projboard.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId};
pub use service::intake::{IntakeError, IntakeResult, ProjectDraft, ProjectIntake};
pub use store::project_store::{ListenerId, ProjectStore, SharedProjectStore};
pub use validation::{validate, FieldValue, Validatable};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
