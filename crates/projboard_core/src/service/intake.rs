//! Project intake use-case service.
//!
//! # Responsibility
//! - Apply the canonical field constraint profile to raw form input.
//! - Coerce accepted fields and submit them to the shared store.
//!
//! # Invariants
//! - A rejected draft never mutates the store.
//! - The store receives typed, validated values only.
//! - Log events carry metadata, never user-entered field text.

use crate::model::project::ProjectId;
use crate::store::project_store::SharedProjectStore;
use crate::validation::{validate, Validatable};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: f64 = 1.0;
const PEOPLE_MAX: f64 = 5.0;

pub type IntakeResult<T> = Result<T, IntakeError>;

/// Intake error surfaced to input adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// One or more field constraints were unmet. Callers learn no
    /// per-field detail; resubmitting corrected input is the recovery
    /// path.
    ValidationFailed,
}

impl Display for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed => write!(f, "project input failed validation"),
        }
    }
}

impl Error for IntakeError {}

/// Raw field values as read from an input surface, before validation
/// or coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Headcount as entered; parsed during intake.
    pub people: String,
}

/// Form-side intake facade over the shared store.
pub struct ProjectIntake {
    store: SharedProjectStore,
}

impl ProjectIntake {
    /// Creates an intake bound to the application's store handle.
    pub fn new(store: SharedProjectStore) -> Self {
        Self { store }
    }

    /// Validates one draft and appends it to the store on success.
    ///
    /// # Contract
    /// - title: required.
    /// - description: required, strictly more than five characters.
    /// - people: required, integer between 1 and 5 inclusive.
    /// - Returns the new project ID on success; on any constraint
    ///   failure returns `ValidationFailed` and leaves the store
    ///   untouched.
    pub fn submit(&self, draft: &ProjectDraft) -> IntakeResult<ProjectId> {
        let title = Validatable::text(draft.title.clone()).required();
        let description = Validatable::text(draft.description.clone())
            .required()
            .min_length(DESCRIPTION_MIN_LENGTH);
        let people_value = coerce_people(&draft.people);
        let people = Validatable::number(people_value)
            .required()
            .min(PEOPLE_MIN)
            .max(PEOPLE_MAX);

        if !validate(&title) || !validate(&description) || !validate(&people) {
            warn!("event=project_rejected module=intake status=invalid");
            return Err(IntakeError::ValidationFailed);
        }

        let id = self.store.borrow_mut().add_project(
            draft.title.clone(),
            draft.description.clone(),
            people_value as u32,
        );
        info!("event=project_submitted module=intake status=ok project_id={id}");
        Ok(id)
    }
}

/// Coerces raw headcount text to a number for range checking.
///
/// A value that does not parse as an integer maps to NaN, which fails
/// both range bounds, so a parse failure is reported identically to a
/// range violation.
fn coerce_people(raw: &str) -> f64 {
    raw.trim().parse::<u32>().map(f64::from).unwrap_or(f64::NAN)
}
