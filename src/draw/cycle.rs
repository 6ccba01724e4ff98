//! Cycle drawing
//!
//! Cuts the shuffled list into consecutive blocks following the plan and
//! lets every member of a block give to the next one, the last wrapping
//! around to the first.

use std::collections::{BTreeMap, HashSet};

use crate::error::DrawError;
use crate::plan::PermutationPlan;

/// One gifter and the person they give to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// The participant giving the gift
    pub gifter: String,
    /// The participant receiving it
    pub recipient: String,
}

/// The result of a draw: exactly one pairing per participant.
///
/// Gifters are unique, recipients are unique, and nobody is paired with
/// themself. Pairings are kept in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pairings: Vec<Pairing>,
}

impl Assignment {
    /// Pairings in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter()
    }

    /// Number of pairings (equal to the number of participants)
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// True when nobody took part
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Look up whom `gifter` gives to
    #[must_use]
    pub fn recipient_of(&self, gifter: &str) -> Option<&str> {
        self.pairings
            .iter()
            .find(|p| p.gifter == gifter)
            .map(|p| p.recipient.as_str())
    }

    /// The assignment as a gifter → recipient map
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&str, &str> {
        self.pairings
            .iter()
            .map(|p| (p.gifter.as_str(), p.recipient.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}

/// Draw the assignment for an already shuffled participant list.
///
/// Fails with [`DrawError::InvalidCycle`] if any group has a cycle size
/// below 2, with [`DrawError::CoverageOverflow`] or
/// [`DrawError::PlanMismatch`] if the plan does not cover the list exactly,
/// and with [`DrawError::DuplicateParticipant`] if a name repeats.
pub fn draw_cycles(shuffled: &[String], plan: &PermutationPlan) -> Result<Assignment, DrawError> {
    if let Some(group) = plan.groups().iter().find(|g| g.size < 2) {
        return Err(DrawError::InvalidCycle { size: group.size });
    }
    let covered = plan.coverage().ok_or(DrawError::CoverageOverflow)?;
    if covered != shuffled.len() {
        return Err(DrawError::PlanMismatch {
            covered,
            available: shuffled.len(),
        });
    }

    let mut seen = HashSet::with_capacity(shuffled.len());
    if let Some(dup) = shuffled.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(DrawError::DuplicateParticipant(dup.clone()));
    }

    let mut pairings = Vec::with_capacity(shuffled.len());
    let mut cursor = 0;
    for group in plan.groups() {
        for _ in 0..group.count {
            let block = &shuffled[cursor..cursor + group.size];
            pairings.extend(rotate(block));
            cursor += group.size;
        }
    }
    debug_assert_eq!(cursor, shuffled.len());

    Ok(Assignment { pairings })
}

/// Map `block[i]` to `block[(i + 1) % len]`
fn rotate(block: &[String]) -> impl Iterator<Item = Pairing> + '_ {
    block
        .iter()
        .zip(block.iter().cycle().skip(1))
        .map(|(gifter, recipient)| Pairing {
            gifter: gifter.clone(),
            recipient: recipient.clone(),
        })
}
