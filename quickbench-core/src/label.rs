//! Display Labels
//!
//! Caller-supplied names win verbatim; otherwise a candidate is shown as
//! `[index] name`, which keeps anonymous and duplicate names apart.

use crate::candidate::Candidate;
use crate::error::ConfigurationError;

/// Rendered name of an anonymous candidate
pub const ANONYMOUS_NAME: &str = "<closure>";

/// Resolve one display label per candidate.
///
/// Fails with [`ConfigurationError::NamesLength`] when `names` is given but
/// does not have one entry per candidate.
pub fn resolve_labels<C>(
    candidates: &[C],
    names: Option<&[String]>,
) -> Result<Vec<String>, ConfigurationError>
where
    C: Candidate,
{
    match names {
        Some(names) => {
            if names.len() != candidates.len() {
                return Err(ConfigurationError::NamesLength {
                    expected: candidates.len(),
                    got: names.len(),
                });
            }
            Ok(names.to_vec())
        }
        None => Ok(candidates
            .iter()
            .enumerate()
            .map(|(i, c)| format!("[{}] {}", i, c.name().unwrap_or(ANONYMOUS_NAME)))
            .collect()),
    }
}
