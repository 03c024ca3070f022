//! Field validation rule engine.
//!
//! # Responsibility
//! - Decide whether one raw field value satisfies its declared
//!   constraints.
//!
//! # Invariants
//! - `validate` is total: every well-formed input yields a bool, never
//!   an error, and callers learn no per-constraint detail.
//! - A constraint declared for the wrong value kind is ignored, not
//!   rejected.
//! - Text length bounds are exclusive; numeric range bounds are
//!   inclusive.

/// Raw field value as read from an input surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free-form text input.
    Text(String),
    /// Numeric input. NaN stands in for a failed numeric coercion and
    /// fails every range check.
    Number(f64),
}

/// Transient bundle of one field value and its declared constraints.
///
/// Built per validation call and discarded afterwards. Constraints that
/// do not match the value kind are carried but never evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Starts a constraint-free description of a text field.
    pub fn text(value: impl Into<String>) -> Self {
        Self::with_value(FieldValue::Text(value.into()))
    }

    /// Starts a constraint-free description of a numeric field.
    pub fn number(value: f64) -> Self {
        Self::with_value(FieldValue::Number(value))
    }

    fn with_value(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires a non-blank value.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires text strictly longer than `bound` characters.
    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    /// Requires text strictly shorter than `bound` characters.
    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    /// Requires a number of at least `bound`.
    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires a number of at most `bound`.
    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Evaluates every declared constraint against the field value.
///
/// # Contract
/// - Starts from valid and ANDs one check per present constraint.
/// - `required` fails when the trimmed text form is empty; the text
///   form of a number (NaN included) is never empty, so numbers always
///   satisfy `required`.
/// - `min_length`/`max_length` apply to text only, with exclusive
///   bounds over the character count.
/// - `min`/`max` apply to numbers only, with inclusive bounds.
/// - No side effects; no failure detail beyond the single bool.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid
            && match &input.value {
                FieldValue::Text(value) => !value.trim().is_empty(),
                FieldValue::Number(_) => true,
            };
    }

    if let (Some(bound), FieldValue::Text(value)) = (input.min_length, &input.value) {
        is_valid = is_valid && value.chars().count() > bound;
    }

    if let (Some(bound), FieldValue::Text(value)) = (input.max_length, &input.value) {
        is_valid = is_valid && value.chars().count() < bound;
    }

    if let (Some(bound), FieldValue::Number(value)) = (input.min, &input.value) {
        is_valid = is_valid && *value >= bound;
    }

    if let (Some(bound), FieldValue::Number(value)) = (input.max, &input.value) {
        is_valid = is_valid && *value <= bound;
    }

    is_valid
}
