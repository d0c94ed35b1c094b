//! PackedChat <-> PeerRef conversions

use grammers_session::{PackedChat, PackedType};
use tgfeed_core::{PeerKind, PeerRef};

fn peer_kind(ty: PackedType) -> PeerKind {
    match ty {
        PackedType::User => PeerKind::User,
        PackedType::Bot => PeerKind::Bot,
        PackedType::Chat => PeerKind::Chat,
        PackedType::Megagroup => PeerKind::Megagroup,
        PackedType::Broadcast => PeerKind::Broadcast,
        PackedType::Gigagroup => PeerKind::Gigagroup,
    }
}

fn packed_type(kind: PeerKind) -> PackedType {
    match kind {
        PeerKind::User => PackedType::User,
        PeerKind::Bot => PackedType::Bot,
        PeerKind::Chat => PackedType::Chat,
        PeerKind::Megagroup => PackedType::Megagroup,
        PeerKind::Broadcast => PackedType::Broadcast,
        PeerKind::Gigagroup => PackedType::Gigagroup,
    }
}

pub fn peer_from_packed(packed: PackedChat) -> PeerRef {
    PeerRef::new(peer_kind(packed.ty), packed.id, packed.access_hash)
}

pub fn packed_from_peer(peer: &PeerRef) -> PackedChat {
    PackedChat {
        ty: packed_type(peer.kind),
        id: peer.id,
        access_hash: peer.access_hash,
    }
}
