//! Value objects - immutable types that represent domain concepts

mod channel_ref;
mod peer;

pub use channel_ref::ChannelRef;
pub use peer::{PeerKind, PeerRef};
