//! Partition identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a physical data partition.
///
/// Partition ids are small non-negative integers. Negative ids are
/// unrepresentable by construction; inputs that would produce one are
/// rejected at the parsing boundary instead of being coerced.
///
/// Partition `0` is reserved: it backs the `default` tenant and every
/// request the system issues for itself.
///
/// # Examples
///
/// ```
/// use ddx_tenancy::PartitionId;
///
/// let partition = PartitionId::new(3);
/// assert_eq!(partition.as_u32(), 3);
/// assert!(!partition.is_default());
/// assert!(PartitionId::DEFAULT.is_default());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionId(u32);

impl PartitionId {
    /// The reserved default partition, backing the `default` tenant and
    /// all system-originated work.
    pub const DEFAULT: PartitionId = PartitionId(0);

    /// Creates a partition id from a raw integer.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns `true` if this is the reserved default partition.
    pub const fn is_default(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartitionId({})", self.0)
    }
}

impl From<u32> for PartitionId {
    fn from(id: u32) -> Self {
        PartitionId::new(id)
    }
}

impl FromStr for PartitionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(PartitionId::new)
    }
}
