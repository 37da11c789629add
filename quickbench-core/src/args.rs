//! Argument Bundles
//!
//! The shared, named argument values handed to every candidate, and the
//! per-candidate view produced by the binder.

use crate::error::BindingError;
use fxhash::FxHashMap;
use std::any::Any;
use std::fmt;

/// Mapping from argument name to an opaque value.
///
/// Values are stored type-erased; candidates recover them with
/// [`BoundArgs::get`]. The bundle is never mutated by a check or bench pass.
#[derive(Default)]
pub struct ArgumentBundle {
    values: FxHashMap<String, Box<dyn Any>>,
}

impl ArgumentBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style
    pub fn with<T: Any>(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace an argument, returning the previous value if any
    pub fn insert<T: Any>(&mut self, name: impl Into<String>, value: T) -> Option<Box<dyn Any>> {
        self.values.insert(name.into(), Box::new(value))
    }

    /// Typed lookup of a single argument
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name).and_then(|v| v.downcast_ref::<T>())
    }

    pub(crate) fn get_raw(&self, name: &str) -> Option<&dyn Any> {
        self.values.get(name).map(|v| v.as_ref())
    }

    /// Whether an argument with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Argument names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bundle holds no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ArgumentBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentBundle")
            .field("names", &self.names())
            .finish()
    }
}

/// Call-ready arguments for one candidate.
///
/// Holds exactly the entries the candidate declared, in declaration order.
pub struct BoundArgs<'a> {
    entries: Vec<(&'a str, &'a dyn Any)>,
}

impl<'a> BoundArgs<'a> {
    pub(crate) fn new(entries: Vec<(&'a str, &'a dyn Any)>) -> Self {
        Self { entries }
    }

    /// Borrow a declared argument as `T`
    pub fn get<T: Any>(&self, name: &str) -> Result<&'a T, BindingError> {
        let (_, value) = self
            .entries
            .iter()
            .find(|(declared, _)| *declared == name)
            .ok_or_else(|| BindingError::Undeclared {
                parameter: name.to_string(),
            })?;

        value
            .downcast_ref::<T>()
            .ok_or_else(|| BindingError::TypeMismatch {
                parameter: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Declared names in order
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Number of declared arguments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the candidate declared no arguments
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for BoundArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Build an [`ArgumentBundle`] from `name => value` pairs.
///
/// ```ignore
/// let args = args! { "a" => 1_i64, "b" => 2_i64 };
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::ArgumentBundle::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::ArgumentBundle::new()$(.with($name, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_lookup() {
        let bundle = ArgumentBundle::new().with("a", 1_i64).with("b", "two");

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get::<i64>("a"), Some(&1));
        assert_eq!(bundle.get::<&str>("b"), Some(&"two"));
        assert_eq!(bundle.get::<i32>("a"), None);
        assert!(!bundle.contains("c"));
        assert_eq!(bundle.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_args_macro() {
        let bundle = args! { "x" => 1.5_f64, "y" => vec![1, 2, 3] };
        assert_eq!(bundle.get::<f64>("x"), Some(&1.5));
        assert_eq!(bundle.get::<Vec<i32>>("y").map(Vec::len), Some(3));

        let empty = args! {};
        assert!(empty.is_empty());
    }

    #[test]
    fn test_bound_args_typed_access() {
        let bundle = args! { "n" => 7_u32 };
        let bound = BoundArgs::new(vec![("n", bundle.get_raw("n").unwrap())]);

        assert_eq!(bound.get::<u32>("n"), Ok(&7));
        assert!(matches!(
            bound.get::<u64>("n"),
            Err(BindingError::TypeMismatch { .. })
        ));
        assert_eq!(
            bound.get::<u32>("m"),
            Err(BindingError::Undeclared {
                parameter: "m".to_string()
            })
        );
    }
}
