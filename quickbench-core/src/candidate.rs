//! Candidates
//!
//! A candidate is one function under test. It declares the argument names it
//! needs and is invoked with the matching [`BoundArgs`].

use crate::args::BoundArgs;
use crate::error::BoxError;

/// One function under check or benchmark
pub trait Candidate {
    /// Value produced by one invocation
    type Output;

    /// Declared name, `None` for anonymous closures
    fn name(&self) -> Option<&str>;

    /// Declared parameter names, each of which must exist in the bundle
    fn params(&self) -> &[&'static str];

    /// Run the candidate once
    fn invoke(&mut self, args: &BoundArgs<'_>) -> Result<Self::Output, BoxError>;
}

/// Type-erased candidate, as stored in a candidate list
pub type BoxedCandidate<'a, R> = Box<dyn Candidate<Output = R> + 'a>;

/// Box a candidate for use in a candidate list
pub fn boxed<'a, C>(candidate: C) -> BoxedCandidate<'a, C::Output>
where
    C: Candidate + 'a,
{
    Box::new(candidate)
}

impl<C: Candidate + ?Sized> Candidate for Box<C> {
    type Output = C::Output;

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn params(&self) -> &[&'static str] {
        (**self).params()
    }

    fn invoke(&mut self, args: &BoundArgs<'_>) -> Result<Self::Output, BoxError> {
        (**self).invoke(args)
    }
}

/// Candidate backed by a closure and an explicit parameter list
pub struct FnCandidate<F> {
    name: Option<String>,
    params: &'static [&'static str],
    func: F,
}

impl<F> FnCandidate<F> {
    /// Create an anonymous candidate
    ///
    /// ```ignore
    /// let add = FnCandidate::new(&["a", "b"], |args| {
    ///     Ok(args.get::<i64>("a")? + args.get::<i64>("b")?)
    /// });
    /// ```
    pub fn new<R>(params: &'static [&'static str], func: F) -> Self
    where
        F: FnMut(&BoundArgs<'_>) -> Result<R, BoxError>,
    {
        Self {
            name: None,
            params,
            func,
        }
    }

    /// Give the candidate a declared name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<F, R> Candidate for FnCandidate<F>
where
    F: FnMut(&BoundArgs<'_>) -> Result<R, BoxError>,
{
    type Output = R;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn params(&self) -> &[&'static str] {
        self.params
    }

    fn invoke(&mut self, args: &BoundArgs<'_>) -> Result<R, BoxError> {
        (self.func)(args)
    }
}

/// Build a `Vec` of boxed candidates sharing one output type.
///
/// ```ignore
/// let mut funcs = candidates![good_candidate(), bad_candidate()];
/// ```
#[macro_export]
macro_rules! candidates {
    ($($candidate:expr),* $(,)?) => {
        vec![$($crate::boxed($candidate)),*]
    };
}
