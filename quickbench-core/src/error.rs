//! Error Taxonomy
//!
//! Binding, configuration and invocation failures. Nothing here is retried:
//! every error aborts the remaining work of the pass that raised it.

use thiserror::Error;

/// Boxed error returned by a failing candidate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A candidate's declared parameters could not be satisfied by the bundle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A declared parameter has no entry in the bundle
    #[error("candidate {candidate} declares parameter `{parameter}` which is not in the argument bundle")]
    Missing {
        /// Display label of the candidate, or its declared name outside a pass
        candidate: String,
        /// Declared name with no bundle entry
        parameter: String,
    },

    /// The bundle entry holds a different type than requested
    #[error("argument `{parameter}` is not a `{expected}`")]
    TypeMismatch {
        /// Argument name
        parameter: String,
        /// Requested type
        expected: &'static str,
    },

    /// The candidate read an argument it did not declare
    #[error("argument `{parameter}` was not declared by the candidate")]
    Undeclared {
        /// Argument name
        parameter: String,
    },
}

impl BindingError {
    /// Attach a display label to a `Missing` error
    pub fn with_label(self, label: &str) -> Self {
        match self {
            BindingError::Missing { parameter, .. } => BindingError::Missing {
                candidate: label.to_string(),
                parameter,
            },
            other => other,
        }
    }
}

/// Invalid options, detected before any candidate runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Display names do not pair up with candidates
    #[error("{got} display names given for {expected} candidates")]
    NamesLength {
        /// Number of candidates
        expected: usize,
        /// Number of names given
        got: usize,
    },

    /// Iteration count of zero
    #[error("iteration count must be a positive integer")]
    ZeroIterations,

    /// Empty candidate list
    #[error("at least one candidate is required")]
    NoCandidates,

    /// Not enough candidates to compare
    #[error("at least {required} candidates are required, got {got}")]
    TooFewCandidates {
        /// Minimum for the pass
        required: usize,
        /// Candidates given
        got: usize,
    },
}

/// Any failure of a `check` or `bench` pass
#[derive(Debug, Error)]
pub enum Error {
    /// Arguments could not be bound
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// Invalid pass options
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A candidate returned an error
    #[error("candidate {label} failed: {source}")]
    Invocation {
        /// Display label of the failing candidate
        label: String,
        /// Error returned by the candidate
        #[source]
        source: BoxError,
    },

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Classify an error coming out of `Candidate::invoke`.
    ///
    /// Typed-access failures inside the candidate surface as `Binding`,
    /// everything else is the candidate's own error and is kept as-is.
    pub fn from_candidate(label: &str, error: BoxError) -> Self {
        match error.downcast::<BindingError>() {
            Ok(binding) => Error::Binding(*binding),
            Err(source) => Error::Invocation {
                label: label.to_string(),
                source,
            },
        }
    }

    /// Hand back the candidate's original error, if this is an invocation failure
    pub fn into_candidate_error(self) -> Option<BoxError> {
        match self {
            Error::Invocation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias used across QuickBench
pub type Result<T, E = Error> = std::result::Result<T, E>;
