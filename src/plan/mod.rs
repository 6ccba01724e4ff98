//! Permutation plans
//!
//! A plan describes how the shuffled participant list is cut into gift
//! cycles: an ordered list of `(size, count)` groups meaning "`count`
//! disjoint cycles of `size` participants each".

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod parse;
pub mod resolve;

pub use parse::parse_spec;
pub use resolve::{apply_fixed, resolve_plan, resolve_wildcard, FixedPass};

/// A raw `(size, count)` pair as written by the caller.
///
/// A negative field is unspecified and will be inferred from the
/// participants not yet covered by the other pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSpec {
    /// Participants per cycle, negative if unspecified
    pub size: i64,
    /// Number of cycles, negative if unspecified
    pub count: i64,
}

impl CycleSpec {
    /// Create a raw pair
    #[must_use]
    pub const fn new(size: i64, count: i64) -> Self {
        Self { size, count }
    }

    /// True if either dimension is left for inference
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.size < 0 || self.count < 0
    }

    /// True if the pair covers nobody (`size == 0` or `count == 0`)
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.size == 0 || self.count == 0
    }
}

/// A fully resolved `(size, count)` group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleGroup {
    /// Participants per cycle
    pub size: usize,
    /// Number of cycles
    pub count: usize,
}

impl CycleGroup {
    /// Create a resolved group
    #[must_use]
    pub const fn new(size: usize, count: usize) -> Self {
        Self { size, count }
    }

    /// Participants covered by this group, `None` on overflow
    #[must_use]
    pub const fn coverage(&self) -> Option<usize> {
        self.size.checked_mul(self.count)
    }
}

impl fmt::Display for CycleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.size, self.count)
    }
}

/// An ordered list of resolved groups that exactly partitions the group.
///
/// Only [`resolve_plan`] builds non-empty plans from user input, so a plan
/// obtained from it always covers exactly the participant count it was
/// resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermutationPlan {
    cycles: Vec<CycleGroup>,
}

impl PermutationPlan {
    /// Wrap already resolved groups without validation.
    ///
    /// The drawer re-checks cycle sizes, so a hand-built plan cannot make it
    /// produce a self-assignment.
    #[must_use]
    pub const fn from_groups(cycles: Vec<CycleGroup>) -> Self {
        Self { cycles }
    }

    /// The groups in draw order
    #[must_use]
    pub fn groups(&self) -> &[CycleGroup] {
        &self.cycles
    }

    /// Total participants covered, `None` if the count overflows
    #[must_use]
    pub fn coverage(&self) -> Option<usize> {
        self.cycles
            .iter()
            .try_fold(0_usize, |total, group| total.checked_add(group.coverage()?))
    }

    /// True if the plan has no groups
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

impl fmt::Display for PermutationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cycles.is_empty() {
            return f.write_str("(empty)");
        }
        for group in &self.cycles {
            write!(f, "{group}")?;
        }
        Ok(())
    }
}
