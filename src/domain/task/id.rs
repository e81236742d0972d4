//! Strongly-typed task identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a task.
///
/// Ids are assigned by the persistence layer (auto-increment, 32-bit
/// unsigned) and are never reused. Path parameters parse through
/// [`FromStr`], which rejects non-numeric and overflowing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    /// Sentinel for a task that has not been persisted yet.
    pub const UNASSIGNED: TaskId = TaskId(0);

    /// Creates a TaskId from a raw u32.
    pub fn from_u32(id: u32) -> Self {
        Self(id)
    }

    /// Returns the inner u32.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Whether the persistence layer has assigned this id.
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<u32>()?))
    }
}
