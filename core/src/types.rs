//! Shared primitive types used across the staff simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle for an employee inside an [`Office`](crate::office::Office).
///
/// Ids are handed out sequentially at hire and never reused. A manager
/// back-reference is just one of these, so no employee ever owns another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl EmployeeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e-{:04}", self.0)
    }
}

/// Position of an entry in the office event log.
pub type EventSeq = u64;
