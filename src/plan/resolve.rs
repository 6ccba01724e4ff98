//! Permutation plan resolution
//!
//! Turns raw `(size, count)` pairs into a [`PermutationPlan`] that covers
//! exactly `n` participants. Runs in two passes so that each failure mode
//! can be checked on its own:
//!
//! 1. [`apply_fixed`] drops no-op pairs, subtracts every fully specified pair
//!    from the remaining capacity and sets wildcards aside.
//! 2. [`resolve_wildcard`] validates the first pass, infers the single
//!    wildcard (if any) from the remaining capacity and checks coverage.

use crate::error::PlanError;

use super::{CycleGroup, CycleSpec, PermutationPlan};

/// Intermediate state after the fixed pairs have been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPass {
    /// Fully specified pairs, in input order
    pub fixed: Vec<CycleSpec>,
    /// Pairs with an unspecified dimension, in input order
    pub wildcards: Vec<CycleSpec>,
    /// Participants not yet covered by `fixed`; negative when over-allocated
    pub remaining: i64,
    /// Size of the group the pass was applied to
    pub participants: usize,
}

/// First pass: apply every fully specified pair to the capacity `n`.
///
/// Never fails; whether the result is usable is decided by
/// [`resolve_wildcard`].
#[must_use]
pub fn apply_fixed(raw: &[CycleSpec], n: usize) -> FixedPass {
    let mut pass = FixedPass {
        fixed: Vec::new(),
        wildcards: Vec::new(),
        remaining: i64::try_from(n).unwrap_or(i64::MAX),
        participants: n,
    };

    for spec in raw.iter().filter(|s| !s.is_noop()) {
        if spec.is_wildcard() {
            pass.wildcards.push(*spec);
            continue;
        }
        pass.remaining = pass
            .remaining
            .saturating_sub(spec.size.saturating_mul(spec.count));
        pass.fixed.push(*spec);
    }

    pass
}

/// Second pass: infer the wildcard and validate the partition.
///
/// Checks, in order: at most one wildcard, no over-allocation, the wildcard
/// fixes one dimension, no cycle of size 1, exact coverage. A wildcard that
/// resolves to zero cycles (everyone already covered) is dropped, as are
/// wildcards that cover nobody to begin with.
pub fn resolve_wildcard(pass: FixedPass) -> Result<PermutationPlan, PlanError> {
    let FixedPass {
        fixed,
        wildcards,
        mut remaining,
        participants,
    } = pass;
    let wildcards: Vec<CycleSpec> = wildcards.into_iter().filter(|w| !w.is_noop()).collect();

    if wildcards.len() > 1 {
        return Err(PlanError::MultipleWildcards {
            count: wildcards.len(),
        });
    }

    let covered_by_fixed: i64 = fixed
        .iter()
        .map(|s| s.size.saturating_mul(s.count))
        .fold(0, i64::saturating_add);
    if remaining < 0 {
        return Err(PlanError::OverAllocated {
            needed: covered_by_fixed,
            available: participants,
        });
    }

    let mut resolved = fixed;
    if let Some(wildcard) = wildcards.first() {
        let inferred = infer(*wildcard, remaining)?;
        remaining -= inferred.size * inferred.count;
        if !inferred.is_noop() {
            resolved.push(inferred);
        }
    }

    let degenerate: i64 = resolved
        .iter()
        .filter(|s| s.size == 1)
        .map(|s| s.count)
        .sum();
    if degenerate > 0 {
        return Err(PlanError::DegenerateCycle {
            count: dim(degenerate),
        });
    }

    if remaining != 0 {
        return Err(PlanError::InexactCoverage {
            uncovered: remaining,
        });
    }

    Ok(PermutationPlan::from_groups(
        resolved
            .into_iter()
            .map(|s| CycleGroup::new(dim(s.size), dim(s.count)))
            .collect(),
    ))
}

/// Resolve raw pairs against a group of `n` participants.
///
/// `n == 0` with only wildcards or no pairs yields an empty plan.
pub fn resolve_plan(raw: &[CycleSpec], n: usize) -> Result<PermutationPlan, PlanError> {
    resolve_wildcard(apply_fixed(raw, n))
}

/// Fill in the unspecified dimension by truncating division of `remaining`.
///
/// The known dimension is non-zero: no-op wildcards never get here.
fn infer(wildcard: CycleSpec, remaining: i64) -> Result<CycleSpec, PlanError> {
    match (wildcard.size < 0, wildcard.count < 0) {
        (true, true) => Err(PlanError::UnboundedWildcard {
            size: wildcard.size,
            count: wildcard.count,
        }),
        (true, false) => Ok(CycleSpec::new(remaining / wildcard.count, wildcard.count)),
        (false, _) => Ok(CycleSpec::new(wildcard.size, remaining / wildcard.size)),
    }
}

/// Convert a dimension already known to be non-negative
fn dim(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(pairs: &[(i64, i64)]) -> Vec<CycleSpec> {
        pairs.iter().map(|&(s, c)| CycleSpec::new(s, c)).collect()
    }

    fn groups(plan: &PermutationPlan) -> Vec<(usize, usize)> {
        plan.groups().iter().map(|g| (g.size, g.count)).collect()
    }

    #[test]
    fn test_single_wildcard_covers_everyone() {
        let plan = resolve_plan(&specs(&[(-1, 1)]), 4).unwrap();
        assert_eq!(groups(&plan), vec![(4, 1)]);
    }

    #[test]
    fn test_fixed_pairs_returned_unchanged() {
        let plan = resolve_plan(&specs(&[(2, 3)]), 6).unwrap();
        assert_eq!(groups(&plan), vec![(2, 3)]);

        let plan = resolve_plan(&specs(&[(3, 1), (2, 2), (5, 1)]), 12).unwrap();
        assert_eq!(groups(&plan), vec![(3, 1), (2, 2), (5, 1)]);
    }

    #[test]
    fn test_wildcard_count_inferred() {
        let plan = resolve_plan(&specs(&[(3, 1), (2, -1)]), 9).unwrap();
        assert_eq!(groups(&plan), vec![(3, 1), (2, 3)]);
        assert_eq!(plan.coverage(), Some(9));
    }

    #[test]
    fn test_wildcard_size_inferred_and_appended_last() {
        let plan = resolve_plan(&specs(&[(-1, 2), (2, 1)]), 10).unwrap();
        assert_eq!(groups(&plan), vec![(2, 1), (4, 2)]);
    }

    #[test]
    fn test_noop_pairs_dropped() {
        let plan = resolve_plan(&specs(&[(0, 3), (4, 0), (-1, 1), (2, 0)]), 5).unwrap();
        assert_eq!(groups(&plan), vec![(5, 1)]);
    }

    #[test]
    fn test_zero_participants_gives_empty_plan() {
        assert!(resolve_plan(&[], 0).unwrap().is_empty());
        assert!(resolve_plan(&specs(&[(-1, 1)]), 0).unwrap().is_empty());
    }

    #[test]
    fn test_wildcard_resolving_to_nothing_is_dropped() {
        let plan = resolve_plan(&specs(&[(2, 2), (3, -1)]), 4).unwrap();
        assert_eq!(groups(&plan), vec![(2, 2)]);
    }

    #[test]
    fn test_two_wildcards_rejected() {
        let err = resolve_plan(&specs(&[(-1, 1), (2, -1)]), 6).unwrap_err();
        assert_eq!(err, PlanError::MultipleWildcards { count: 2 });
    }

    #[test]
    fn test_multiple_wildcards_reported_before_over_allocation() {
        let err = resolve_plan(&specs(&[(9, 9), (-1, 1), (-1, 2)]), 4).unwrap_err();
        assert!(matches!(err, PlanError::MultipleWildcards { .. }));
    }

    #[test]
    fn test_over_allocation_rejected() {
        let err = resolve_plan(&specs(&[(3, 2)]), 5).unwrap_err();
        assert_eq!(
            err,
            PlanError::OverAllocated {
                needed: 6,
                available: 5
            }
        );
    }

    #[test]
    fn test_under_allocation_rejected() {
        let err = resolve_plan(&specs(&[(2, 2)]), 5).unwrap_err();
        assert_eq!(err, PlanError::InexactCoverage { uncovered: 1 });
    }

    #[test]
    fn test_uneven_wildcard_division_rejected() {
        // 7 / 2 truncates to 3 cycles of 2, leaving one participant out
        let err = resolve_plan(&specs(&[(2, -1)]), 7).unwrap_err();
        assert_eq!(err, PlanError::InexactCoverage { uncovered: 1 });
    }

    #[test]
    fn test_wildcard_inferring_size_one_rejected() {
        let err = resolve_plan(&specs(&[(2, 2), (-1, 1)]), 5).unwrap_err();
        assert_eq!(err, PlanError::DegenerateCycle { count: 1 });
    }

    #[test]
    fn test_fixed_size_one_rejected() {
        let err = resolve_plan(&specs(&[(1, 2), (3, 1)]), 5).unwrap_err();
        assert_eq!(err, PlanError::DegenerateCycle { count: 2 });
    }

    #[test]
    fn test_fully_unspecified_wildcard_rejected() {
        let err = resolve_plan(&specs(&[(-1, -1)]), 4).unwrap_err();
        assert_eq!(err, PlanError::UnboundedWildcard { size: -1, count: -1 });
    }

    #[test]
    fn test_huge_pairs_do_not_overflow() {
        let err = resolve_plan(&specs(&[(i64::MAX, i64::MAX)]), 3).unwrap_err();
        assert!(matches!(err, PlanError::OverAllocated { .. }));
    }

    #[test]
    fn test_over_allocation_reports_group_size() {
        let err = resolve_plan(&specs(&[(i64::MAX, 1), (i64::MAX, 1)]), 3).unwrap_err();
        assert_eq!(
            err,
            PlanError::OverAllocated {
                needed: i64::MAX,
                available: 3
            }
        );
    }

    #[test]
    fn test_over_allocation_reported_before_unbounded_wildcard() {
        let err = resolve_plan(&specs(&[(9, 9), (-1, -1)]), 4).unwrap_err();
        assert!(matches!(err, PlanError::OverAllocated { .. }));
    }

    #[test]
    fn test_size_one_reported_before_inexact_coverage() {
        let err = resolve_plan(&specs(&[(1, 1)]), 5).unwrap_err();
        assert_eq!(err, PlanError::DegenerateCycle { count: 1 });
    }

    #[test]
    fn test_second_pass_ignores_noop_wildcards() {
        for wildcard in [(0, -1), (-1, 0)] {
            let pass = FixedPass {
                fixed: specs(&[(2, 2)]),
                wildcards: specs(&[wildcard]),
                remaining: 0,
                participants: 4,
            };
            let plan = resolve_wildcard(pass).unwrap();
            assert_eq!(groups(&plan), vec![(2, 2)], "{wildcard:?}");
        }

        let pass = FixedPass {
            fixed: Vec::new(),
            wildcards: specs(&[(0, -1)]),
            remaining: 4,
            participants: 4,
        };
        let err = resolve_wildcard(pass).unwrap_err();
        assert_eq!(err, PlanError::InexactCoverage { uncovered: 4 });
    }

    #[test]
    fn test_noop_wildcard_does_not_count_as_second_wildcard() {
        let pass = FixedPass {
            fixed: Vec::new(),
            wildcards: specs(&[(-1, 0), (-1, 1)]),
            remaining: 4,
            participants: 4,
        };
        assert_eq!(groups(&resolve_wildcard(pass).unwrap()), vec![(4, 1)]);
    }

    #[test]
    fn test_first_pass_tracks_remaining_and_wildcards() {
        let pass = apply_fixed(&specs(&[(3, 2), (0, 1), (-1, 1)]), 10);
        assert_eq!(pass.fixed, specs(&[(3, 2)]));
        assert_eq!(pass.wildcards, specs(&[(-1, 1)]));
        assert_eq!(pass.remaining, 4);
        assert_eq!(pass.participants, 10);
    }

    #[test]
    fn test_first_pass_goes_negative_on_over_allocation() {
        let pass = apply_fixed(&specs(&[(4, 2)]), 5);
        assert_eq!(pass.remaining, -3);
        assert!(resolve_wildcard(pass).is_err());
    }

    #[test]
    fn test_every_exact_single_wildcard_covers_n() {
        for n in 2..40_usize {
            for size in 2..=n {
                if n % size != 0 {
                    continue;
                }
                let plan = resolve_plan(&specs(&[(size as i64, -1)]), n).unwrap();
                assert_eq!(plan.coverage(), Some(n), "n={n} size={size}");
            }
        }
    }
}
