//! Classification of MTProto failures into domain errors

use grammers_mtsender::InvocationError;
use tgfeed_core::DomainError;

/// RPC errors that mean "this reference does not name a reachable entity"
const UNRESOLVABLE: &[&str] = &[
    "USERNAME_NOT_OCCUPIED",
    "USERNAME_INVALID",
    "CHANNEL_INVALID",
    "PEER_ID_INVALID",
    "CHAT_ID_INVALID",
];

/// Mandated wait of a flood-control RPC error, if it is one
pub fn flood_wait_seconds(name: &str, value: Option<u32>) -> Option<u32> {
    matches!(name, "FLOOD_WAIT" | "FLOOD_PREMIUM_WAIT").then(|| value.unwrap_or(0))
}

/// Whether an RPC error name marks an unresolvable entity
pub fn is_unresolvable(name: &str) -> bool {
    UNRESOLVABLE.contains(&name)
}

/// Convert an invocation error to a DomainError
pub fn map_invocation_error(err: InvocationError) -> DomainError {
    if let InvocationError::Rpc(rpc) = &err {
        if let Some(seconds) = flood_wait_seconds(&rpc.name, rpc.value) {
            return DomainError::FloodWait { seconds };
        }
    }
    DomainError::backend(err)
}

/// Convert an error raised while resolving an entity reference
pub fn map_resolve_error(err: InvocationError) -> DomainError {
    if let InvocationError::Rpc(rpc) = &err {
        if is_unresolvable(&rpc.name) {
            return DomainError::channel_not_found(&err);
        }
    }
    map_invocation_error(err)
}
