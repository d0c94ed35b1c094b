//! Mappers between raw MTProto objects and domain shapes

pub mod dialog;
pub mod message;
pub mod peer;
pub mod reaction;

pub use dialog::{channel_from_raw, dialog_from_chat};
pub use message::{media_kind, message_from_raw, raw_message_id, timestamp, PeerDirectory};
pub use peer::{packed_from_peer, peer_from_packed};
pub use reaction::{reaction_kind, reaction_summary};
