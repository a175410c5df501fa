//! Probe-channel terminal selector

use serde::{Deserialize, Serialize};
use std::fmt;

/// Virtual terminal id on the probe channel
///
/// Terminals are addressed by a single hex digit on the wire, so valid ids
/// are `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(u8);

impl ChannelId {
    pub const DEFAULT: ChannelId = ChannelId(0);
    pub const MAX: ChannelId = ChannelId(15);

    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether the id addresses an existing terminal
    pub fn is_valid(self) -> bool {
        self <= Self::MAX
    }

    /// Hex digit used to select this terminal on the wire
    pub fn wire_digit(self) -> u8 {
        b"0123456789ABCDEF"[usize::from(self.0 & 0x0F)]
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for ChannelId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
