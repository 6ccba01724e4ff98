//! Domain errors for plan resolution, drawing and participant loading
//!
//! The library surfaces these typed errors; the binary wraps them with
//! `anyhow` context at the edges.

use thiserror::Error;

/// A cycle specification string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecParseError {
    /// A character outside of `(`, `)`, `,`, digits, `-` and whitespace
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar {
        /// The offending character
        found: char,
        /// Byte offset into the specification string
        position: usize,
    },
    /// A group does not contain exactly two comma separated fields
    #[error("group {group} must have the form (size,count), got '({body})'")]
    WrongArity {
        /// 1-indexed group number
        group: usize,
        /// The raw text between the parentheses
        body: String,
    },
    /// A field is not an integer
    #[error("group {group}: '{field}' is not an integer")]
    NotAnInteger {
        /// 1-indexed group number
        group: usize,
        /// The raw field text
        field: String,
    },
    /// An opening parenthesis without its closing partner
    #[error("group {group} is not closed")]
    Unclosed {
        /// 1-indexed group number
        group: usize,
    },
}

/// The cycle specification does not describe an exact partition of the group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// More than one pair has an unspecified dimension
    #[error("at most one unspecified dimension allowed, found {count} wildcards")]
    MultipleWildcards {
        /// Number of wildcard pairs seen
        count: usize,
    },
    /// A wildcard leaves both size and count unspecified
    #[error("wildcard ({size},{count}) must fix either the size or the count")]
    UnboundedWildcard {
        /// Raw size field
        size: i64,
        /// Raw count field
        count: i64,
    },
    /// Fixed pairs already need more participants than there are
    #[error("over-allocated partition: cycles need {needed} participants, only {available} available")]
    OverAllocated {
        /// Participants covered by the fixed pairs
        needed: i64,
        /// Participants in the group
        available: usize,
    },
    /// A cycle of size 1 would make someone their own recipient
    #[error("cycle of size 1 would assign a participant to themself ({count} such cycle(s))")]
    DegenerateCycle {
        /// How many size-1 cycles were requested or inferred
        count: usize,
    },
    /// The resolved plan covers fewer or more participants than the group has
    #[error("partition does not exactly cover all participants: {uncovered} left over")]
    InexactCoverage {
        /// Remaining capacity after all pairs were applied (negative if over)
        uncovered: i64,
    },
}

/// The drawer was handed a plan or list it cannot turn into an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A cycle shorter than 2 reached the drawer
    #[error("invalid cycle of size {size}: cycles need at least 2 participants")]
    InvalidCycle {
        /// The offending cycle size
        size: usize,
    },
    /// The plan covers a different number of participants than the list holds
    #[error("plan covers {covered} participants but {available} were supplied")]
    PlanMismatch {
        /// Participants covered by the plan
        covered: usize,
        /// Participants in the list
        available: usize,
    },
    /// The plan's sizes and counts multiply past the addressable range
    #[error("plan covers more participants than can be counted")]
    CoverageOverflow,
    /// The same participant appears twice in the list
    #[error("participant '{0}' appears more than once")]
    DuplicateParticipant(String),
}

/// The participant list could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantError {
    /// A name was listed twice
    #[error("duplicate participant '{name}' on line {line} (first seen on line {first_line})")]
    Duplicate {
        /// The repeated name
        name: String,
        /// 1-indexed line of the repeat
        line: usize,
        /// 1-indexed line of the first occurrence
        first_line: usize,
    },
}
