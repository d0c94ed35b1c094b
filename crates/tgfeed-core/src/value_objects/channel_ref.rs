//! Channel reference - how a caller names the channel to read

use std::fmt;

/// Entity-resolution strategy for message retrieval
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChannelRef {
    /// Numeric backend id, bare (`1234`) or marked (`-1001234`)
    Id(i64),
    /// Public handle, without the leading `@`
    Username(String),
}

impl ChannelRef {
    /// Build a handle reference, dropping a leading `@`
    pub fn username(handle: &str) -> Self {
        Self::Username(handle.trim_start_matches('@').to_string())
    }

    /// Bare id with the channel marker (`-100` prefix) removed
    ///
    /// `None` for handles and for ids with no positive counterpart
    /// (`i64::MIN`).
    pub fn bare_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => strip_channel_marker(*id),
            Self::Username(_) => None,
        }
    }
}

/// Marked channel ids are `-(1_000_000_000_000 + id)`
const CHANNEL_MARKER: i64 = 1_000_000_000_000;

fn strip_channel_marker(id: i64) -> Option<i64> {
    if id >= 0 {
        return Some(id);
    }
    let magnitude = id.checked_neg()?;
    if magnitude > CHANNEL_MARKER {
        Some(magnitude - CHANNEL_MARKER)
    } else {
        Some(magnitude)
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => write!(f, "@{name}"),
        }
    }
}
