//! Error taxonomy for the scoring pipeline.
//!
//! Only structural problems abort a run: a table that cannot be read, or
//! a required column that cannot be located at all. Everything else is a
//! per-row anomaly that degrades to zero credit and is collected as a
//! [`Diagnostic`] for the caller to display.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradeError {
    /// A required table or column cannot be located; the dataset is
    /// fundamentally unscoreable.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A non-fatal condition observed during a run. Collected in order of
/// discovery and reported alongside the results, never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A question in the answer key has no matching response column;
    /// it is excluded from scoring for every student.
    UnresolvedQuestion { question: String },

    /// A student's declared variant matches no known variant; the
    /// student is reported with all outcome columns at zero.
    UnscoredStudent {
        student_id: String,
        declared_variant: String,
    },

    /// An outcome code appears in the answer key but not in the
    /// outcome-points table; it contributes zero points.
    UnknownOutcome { outcome: String },

    /// A variant column has no matching answer column; every question
    /// under it yields zero credit.
    UnscorableVariant { variant: String },

    /// The single-answer-column fallback was used for a variant in a
    /// multi-variant key; grading may be wrong if the tagging is missing
    /// rather than intentionally shared.
    AmbiguousAnswerFallback { variant: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedQuestion { question } => {
                write!(f, "question '{question}' has no matching response column")
            }
            Diagnostic::UnscoredStudent {
                student_id,
                declared_variant,
            } => {
                write!(
                    f,
                    "student '{student_id}' declares unknown variant '{declared_variant}'; scored 0"
                )
            }
            Diagnostic::UnknownOutcome { outcome } => {
                write!(
                    f,
                    "outcome '{outcome}' is not in the points table; counted as 0 points"
                )
            }
            Diagnostic::UnscorableVariant { variant } => {
                write!(f, "variant '{variant}' has no answer column; yields 0 credit")
            }
            Diagnostic::AmbiguousAnswerFallback { variant } => {
                write!(
                    f,
                    "variant '{variant}' matched no answer column; fell back to the only one present"
                )
            }
        }
    }
}
