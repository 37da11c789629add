//! Comparison Predicates
//!
//! Ready-made `compfunc`s for [`run_checks`](crate::run_checks). Any
//! `FnMut(&R, &R) -> bool` works; these cover the common cases.

/// Default relative tolerance of [`all_close`]
pub const DEFAULT_RTOL: f64 = 1e-5;

/// Default absolute tolerance of [`all_close`]
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Exact equality
pub fn exact<R: PartialEq>(reference: &R, candidate: &R) -> bool {
    reference == candidate
}

/// Scalar closeness within an absolute tolerance
pub fn approx_eq(tolerance: f64) -> impl Fn(&f64, &f64) -> bool {
    move |reference, candidate| (reference - candidate).abs() <= tolerance
}

/// Element-wise closeness over slices of `f64`.
///
/// An element passes when `|candidate - reference| <= atol + rtol * |reference|`.
/// Slices of different length never match. NaN never matches.
pub fn all_close<T>(rtol: f64, atol: f64) -> impl Fn(&T, &T) -> bool
where
    T: AsRef<[f64]> + ?Sized,
{
    move |reference, candidate| {
        let (reference, candidate) = (reference.as_ref(), candidate.as_ref());
        reference.len() == candidate.len()
            && reference
                .iter()
                .zip(candidate)
                .all(|(r, c)| (c - r).abs() <= atol + rtol * r.abs())
    }
}

/// [`all_close`] with the default tolerances
pub fn all_close_default<T>() -> impl Fn(&T, &T) -> bool
where
    T: AsRef<[f64]> + ?Sized,
{
    all_close(DEFAULT_RTOL, DEFAULT_ATOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        assert!(exact(&3, &3));
        assert!(!exact(&"a", &"b"));
    }

    #[test]
    fn test_approx_eq() {
        let close = approx_eq(0.01);
        assert!(close(&1.0, &1.005));
        assert!(!close(&1.0, &1.02));
    }

    #[test]
    fn test_all_close() {
        let close = all_close::<Vec<f64>>(1e-5, 1e-8);
        assert!(close(&vec![1.0, 2.0], &vec![1.0, 2.000_000_1]));
        assert!(!close(&vec![1.0, 2.0], &vec![1.0, 2.1]));
        assert!(!close(&vec![1.0], &vec![1.0, 1.0]));
        assert!(!close(&vec![f64::NAN], &vec![f64::NAN]));
    }

    #[test]
    fn test_all_close_default_on_slices() {
        let close = all_close_default::<[f64]>();
        assert!(close(&[0.0, 1e-9][..], &[1e-9, 0.0][..]));
    }
}
