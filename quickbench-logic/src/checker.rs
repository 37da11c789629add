//! Correctness Checks
//!
//! Compares every candidate's output against the first candidate, the
//! reference, using a caller-supplied predicate.

use quickbench_core::{
    ArgumentBundle, Candidate, ConfigurationError, Error, Result, bind, resolve_labels,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum candidates for a check: the reference plus one to compare
pub const MIN_CHECK_CANDIDATES: usize = 2;

/// Outcome of comparing one candidate to the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Display label of the checked candidate
    pub label: String,
    /// Display label of the reference
    pub reference_label: String,
    /// Whether the predicate accepted the pair
    pub matches: bool,
}

/// Run a check pass.
///
/// The reference (index 0) is bound and invoked exactly once; its output is
/// reused for every comparison. Each remaining candidate is then bound,
/// invoked and compared in order, and `observe` sees each result as soon as
/// it exists, so output written from it reflects exactly the comparisons
/// that completed.
///
/// Option errors are reported before any candidate runs. Binding and
/// candidate errors abort the pass.
pub fn run_checks<C, P, O>(
    candidates: &mut [C],
    bundle: &ArgumentBundle,
    mut compfunc: P,
    names: Option<&[String]>,
    mut observe: O,
) -> Result<Vec<CheckResult>>
where
    C: Candidate,
    P: FnMut(&C::Output, &C::Output) -> bool,
    O: FnMut(&CheckResult, &[String]) -> Result<()>,
{
    if candidates.len() < MIN_CHECK_CANDIDATES {
        return Err(ConfigurationError::TooFewCandidates {
            required: MIN_CHECK_CANDIDATES,
            got: candidates.len(),
        }
        .into());
    }
    let labels = resolve_labels(candidates, names)?;

    let (reference, rest) = candidates
        .split_first_mut()
        .ok_or(ConfigurationError::NoCandidates)?;
    let reference_label = &labels[0];

    let bound = bind(&*reference, bundle).map_err(|e| e.with_label(reference_label))?;
    let expected = reference
        .invoke(&bound)
        .map_err(|e| Error::from_candidate(reference_label, e))?;
    debug!(reference = %reference_label, "reference computed");

    let mut results = Vec::with_capacity(rest.len());
    for (candidate, label) in rest.iter_mut().zip(&labels[1..]) {
        let bound = bind(&*candidate, bundle).map_err(|e| e.with_label(label))?;
        let actual = candidate
            .invoke(&bound)
            .map_err(|e| Error::from_candidate(label, e))?;

        let result = CheckResult {
            label: label.clone(),
            reference_label: reference_label.clone(),
            matches: compfunc(&expected, &actual),
        };
        debug!(candidate = %label, matches = result.matches, "compared");

        observe(&result, &labels)?;
        results.push(result);
    }

    Ok(results)
}

/// Summary of a check pass
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Comparisons performed
    pub total: usize,
    /// Comparisons the predicate accepted
    pub matched: usize,
    /// Comparisons the predicate rejected
    pub mismatched: usize,
}

impl CheckSummary {
    /// Whether every candidate agreed with the reference
    pub fn all_match(&self) -> bool {
        self.mismatched == 0
    }
}

/// Aggregate check results
pub fn aggregate_checks(results: &[CheckResult]) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for result in results {
        summary.total += 1;
        if result.matches {
            summary.matched += 1;
        } else {
            summary.mismatched += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::exact;
    use proptest::prelude::*;
    use quickbench_core::{BindingError, FnCandidate, args, boxed, candidates};
    use std::cell::Cell;

    fn ignore(_: &CheckResult, _: &[String]) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_commutative_add_matches() {
        let bundle = args! { "a" => 1_i64, "b" => 2_i64 };
        let mut list = candidates![
            FnCandidate::new(&["a", "b"], |args| {
                Ok(args.get::<i64>("a")? + args.get::<i64>("b")?)
            }),
            FnCandidate::new(&["a", "b"], |args| {
                Ok(args.get::<i64>("b")? + args.get::<i64>("a")?)
            }),
        ];

        let results = run_checks(&mut list, &bundle, exact, None, ignore).unwrap();
        assert_eq!(
            results,
            vec![CheckResult {
                label: "[1] <closure>".to_string(),
                reference_label: "[0] <closure>".to_string(),
                matches: true,
            }]
        );
    }

    #[test]
    fn test_single_mismatch_flagged() {
        let bundle = args! {};
        let mut list = candidates![
            FnCandidate::new(&[], |_| Ok(1)),
            FnCandidate::new(&[], |_| Ok(1)),
            FnCandidate::new(&[], |_| Ok(2)),
            FnCandidate::new(&[], |_| Ok(1)),
        ];

        let results = run_checks(&mut list, &bundle, exact, None, ignore).unwrap();
        let flags: Vec<bool> = results.iter().map(|r| r.matches).collect();
        assert_eq!(flags, vec![true, false, true]);

        let summary = aggregate_checks(&results);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.mismatched, 1);
        assert!(!summary.all_match());
    }

    #[test]
    fn test_reference_invoked_once() {
        let reference_calls = Cell::new(0);
        let bundle = args! {};
        let mut list = candidates![
            FnCandidate::new(&[], |_| {
                reference_calls.set(reference_calls.get() + 1);
                Ok(0)
            }),
            FnCandidate::new(&[], |_| Ok(0)),
            FnCandidate::new(&[], |_| Ok(0)),
        ];

        run_checks(&mut list, &bundle, exact, None, ignore).unwrap();
        assert_eq!(reference_calls.get(), 1);
    }

    #[test]
    fn test_predicate_argument_order() {
        let bundle = args! {};
        let mut list = candidates![
            FnCandidate::new(&[], |_| Ok("reference")),
            FnCandidate::new(&[], |_| Ok("candidate")),
        ];

        let mut seen = Vec::new();
        run_checks(
            &mut list,
            &bundle,
            |r, c| {
                seen.push((*r, *c));
                true
            },
            None,
            ignore,
        )
        .unwrap();
        assert_eq!(seen, vec![("reference", "candidate")]);
    }

    #[test]
    fn test_too_few_candidates() {
        let bundle = args! {};
        let mut list = candidates![FnCandidate::new(&[], |_| Ok(0))];

        let err = run_checks(&mut list, &bundle, exact, None, ignore).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::TooFewCandidates { got: 1, .. })
        ));
    }

    #[test]
    fn test_names_mismatch_runs_nothing() {
        let calls = Cell::new(0);
        let bundle = args! {};
        let mut list = candidates![
            FnCandidate::new(&[], |_| {
                calls.set(calls.get() + 1);
                Ok(0)
            }),
            FnCandidate::new(&[], |_| {
                calls.set(calls.get() + 1);
                Ok(0)
            }),
        ];
        let names = vec!["only_one".to_string()];

        let err = run_checks(&mut list, &bundle, exact, Some(&names), ignore).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::NamesLength { .. })
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_binding_error_stops_before_later_candidates() {
        let last = Cell::new(0);
        let bundle = args! { "a" => 1 };
        let mut list = candidates![
            FnCandidate::new(&["a"], |_| Ok(0)),
            FnCandidate::new(&["a"], |_| Ok(0)),
            FnCandidate::new(&["b"], |_| Ok(0)).named("needs_b"),
            FnCandidate::new(&["a"], |_| {
                last.set(last.get() + 1);
                Ok(0)
            }),
        ];

        let mut observed = 0;
        let err = run_checks(&mut list, &bundle, exact, None, |_, _| {
            observed += 1;
            Ok(())
        })
        .unwrap_err();

        assert!(matches!(err, Error::Binding(BindingError::Missing { .. })));
        assert_eq!(observed, 1);
        assert_eq!(last.get(), 0);
    }

    #[test]
    fn test_missing_argument_reports_display_label() {
        let bundle = args! { "a" => 1 };
        let mut list = candidates![
            FnCandidate::new(&["a"], |_| Ok(0)),
            FnCandidate::new(&["a"], |_| Ok(0)),
            FnCandidate::new(&["b"], |_| Ok(0)),
        ];

        let err = run_checks(&mut list, &bundle, exact, None, ignore).unwrap_err();
        match err {
            Error::Binding(BindingError::Missing { candidate, parameter }) => {
                assert_eq!(candidate, "[2] <closure>");
                assert_eq!(parameter, "b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reference_failure_aborts_pass() {
        let later = Cell::new(0);
        let bundle = args! {};
        let mut list = candidates![
            FnCandidate::new(&[], |_| Err::<i32, _>("no reference".into())).named("reference"),
            FnCandidate::new(&[], |_| {
                later.set(later.get() + 1);
                Ok(0)
            }),
        ];

        let mut observed = 0;
        let err = run_checks(&mut list, &bundle, exact, None, |_, _| {
            observed += 1;
            Ok(())
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "candidate [0] reference failed: no reference");
        let source = err.into_candidate_error().unwrap();
        assert_eq!(source.to_string(), "no reference");
        assert_eq!(observed, 0);
        assert_eq!(later.get(), 0);
    }

    #[test]
    fn test_candidate_error_propagates() {
        let bundle = args! {};
        let mut list = candidates![
            FnCandidate::new(&[], |_| Ok(0)),
            FnCandidate::new(&[], |_| Err("kaput".into())),
        ];

        let err = run_checks(&mut list, &bundle, exact, None, ignore).unwrap_err();
        let source = err.into_candidate_error().unwrap();
        assert_eq!(source.to_string(), "kaput");
    }

    proptest! {
        #[test]
        fn prop_constant_outputs_always_match(value in any::<i64>(), count in 2_usize..8) {
            let bundle = args! {};
            let mut list: Vec<_> = (0..count)
                .map(|_| boxed(FnCandidate::new(&[], move |_| Ok(value))))
                .collect();

            let results = run_checks(&mut list, &bundle, exact, None, ignore).unwrap();
            prop_assert_eq!(results.len(), count - 1);
            prop_assert!(aggregate_checks(&results).all_match());
        }

        #[test]
        fn prop_flags_follow_reference_equality(values in prop::collection::vec(0_i8..3, 2..8)) {
            let bundle = args! {};
            let mut list: Vec<_> = values
                .iter()
                .map(|&v| boxed(FnCandidate::new(&[], move |_| Ok(v))))
                .collect();

            let results = run_checks(&mut list, &bundle, exact, None, ignore).unwrap();
            for (result, value) in results.iter().zip(&values[1..]) {
                prop_assert_eq!(result.matches, *value == values[0]);
            }
            let summary = aggregate_checks(&results);
            prop_assert_eq!(summary.matched + summary.mismatched, values.len() - 1);
        }
    }
}
