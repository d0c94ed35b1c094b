//! Resolved peer - an entity the session can address directly

/// Backend entity type of a resolved peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeerKind {
    User,
    Bot,
    /// Basic (non-channel) group
    Chat,
    Megagroup,
    Gigagroup,
    Broadcast,
}

/// A resolved, addressable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerRef {
    pub kind: PeerKind,
    pub id: i64,
    pub access_hash: Option<i64>,
}

impl PeerRef {
    pub fn new(kind: PeerKind, id: i64, access_hash: Option<i64>) -> Self {
        Self {
            kind,
            id,
            access_hash,
        }
    }
}
