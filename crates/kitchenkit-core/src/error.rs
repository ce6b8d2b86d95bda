//! Error handling for KitchenKit
//!
//! The layout engine itself never fails. Errors only exist at the edges:
//! - [`Error`] for strict parsing of enum keys and length strings
//! - [`ValidationIssue`] for setters that clamp or normalise their input
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Strict parsing error.
///
/// The lenient entry points (`Shape::normalize`, `Finish::normalize`) swallow
/// these and fall back to a default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape key not recognised
    #[error("Unknown kitchen shape: {0}")]
    UnknownShape(String),

    /// Finish tier not recognised
    #[error("Unknown finish: {0}")]
    UnknownFinish(String),

    /// Wall key not recognised
    #[error("Unknown wall key: {0}")]
    UnknownWall(String),

    /// View mode not recognised
    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),

    /// Length string could not be parsed
    #[error("Invalid length '{input}': {reason}")]
    InvalidLength {
        /// The raw input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type alias for KitchenKit parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// What a setter did to an input it could not store verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// Value was below the allowed minimum
    #[error("{requested} raised to minimum {applied}")]
    ClampedUp { requested: f64, applied: f64 },

    /// Value was above the allowed maximum
    #[error("{requested} lowered to maximum {applied}")]
    ClampedDown { requested: f64, applied: f64 },

    /// Value was NaN or infinite
    #[error("non-finite value replaced with {applied}")]
    NotFinite { applied: f64 },

    /// Free text mapped onto an enum value
    #[error("'{input}' normalised to '{applied}'")]
    Normalized { input: String, applied: String },

    /// Input was dropped and the stored value left unchanged
    #[error("ignored: {reason}")]
    Ignored { reason: String },
}

/// Non-fatal report returned by estimator setters.
///
/// The adjusted value has already been stored when this is returned; the
/// issue only tells the caller what changed so it can show a hint.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {kind}")]
pub struct ValidationIssue {
    /// Name of the field that was adjusted.
    pub field: String,
    /// What happened to the value.
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// The value that ended up stored, for numeric issues.
    pub fn applied_value(&self) -> Option<f64> {
        match self.kind {
            IssueKind::ClampedUp { applied, .. }
            | IssueKind::ClampedDown { applied, .. }
            | IssueKind::NotFinite { applied } => Some(applied),
            IssueKind::Normalized { .. } | IssueKind::Ignored { .. } => None,
        }
    }
}

/// Clamp `value` into `[min, max]`, reporting any adjustment.
///
/// Non-finite input collapses to `min`.
pub fn clamp_reported(
    field: &str,
    value: f64,
    min: f64,
    max: f64,
) -> std::result::Result<f64, ValidationIssue> {
    if !value.is_finite() {
        return Err(ValidationIssue::new(field, IssueKind::NotFinite { applied: min }));
    }
    if value < min {
        return Err(ValidationIssue::new(
            field,
            IssueKind::ClampedUp {
                requested: value,
                applied: min,
            },
        ));
    }
    if value > max {
        return Err(ValidationIssue::new(
            field,
            IssueKind::ClampedDown {
                requested: value,
                applied: max,
            },
        ));
    }
    Ok(value)
}
