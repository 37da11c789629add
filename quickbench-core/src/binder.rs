//! Argument Binder
//!
//! Selects the entries of an [`ArgumentBundle`] that a candidate declares.
//! How the names are discovered (explicit list or `#[candidate]`) is hidden
//! behind [`Candidate::params`].

use crate::args::{ArgumentBundle, BoundArgs};
use crate::candidate::Candidate;
use crate::error::BindingError;
use crate::label::ANONYMOUS_NAME;

/// Bind a candidate's declared parameters against the bundle.
///
/// Returns the call-ready arguments in declaration order, or
/// [`BindingError::Missing`] for the first declared name the bundle lacks.
/// The error carries the declared name; passes relabel it with
/// [`BindingError::with_label`].
pub fn bind<'a, C>(candidate: &C, bundle: &'a ArgumentBundle) -> Result<BoundArgs<'a>, BindingError>
where
    C: Candidate + ?Sized,
{
    let mut entries = Vec::with_capacity(candidate.params().len());

    for &param in candidate.params() {
        let value = bundle
            .get_raw(param)
            .ok_or_else(|| BindingError::Missing {
                candidate: candidate.name().unwrap_or(ANONYMOUS_NAME).to_string(),
                parameter: param.to_string(),
            })?;
        entries.push((param, value));
    }

    Ok(BoundArgs::new(entries))
}
