//! Messaging session port
//!
//! The authenticated, long-lived session to the messaging backend. The
//! backend client is expected to be safe for concurrent use; callers share
//! one instance without any locking of their own.

use async_trait::async_trait;

use crate::entities::{Dialog, Message};
use crate::error::DomainResult;
use crate::value_objects::{ChannelRef, PeerRef};

/// History window for message retrieval
///
/// Cursors that are `None` are not sent to the backend at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageQuery {
    pub limit: u32,
    /// Only messages older than this id
    pub offset_id: Option<i32>,
    /// Only messages with an id greater than this
    pub min_id: Option<i32>,
    /// Only messages with an id less than this
    pub max_id: Option<i32>,
}

impl MessageQuery {
    /// Query for the newest `limit` messages
    pub fn latest(limit: u32) -> Self {
        Self {
            limit,
            offset_id: None,
            min_id: None,
            max_id: None,
        }
    }
}

#[async_trait]
pub trait MessagingSession: Send + Sync {
    /// Enumerate every conversation visible to the session
    async fn dialogs(&self) -> DomainResult<Vec<Dialog>>;

    /// Resolve a channel reference to an addressable peer
    async fn resolve(&self, target: &ChannelRef) -> DomainResult<PeerRef>;

    /// Fetch history newest-first, as delivered by the backend
    async fn messages(&self, peer: &PeerRef, query: &MessageQuery) -> DomainResult<Vec<Message>>;

    /// Whether the underlying connection is up
    fn is_connected(&self) -> bool;

    /// Persist session state and release the connection
    async fn disconnect(&self) -> DomainResult<()>;
}
