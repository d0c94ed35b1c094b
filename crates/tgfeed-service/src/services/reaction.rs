//! Reaction extraction
//!
//! Flattens a message's raw reaction aggregate into the client-facing list.
//! Extraction never fails retrieval; entries that cannot be rendered are
//! skipped and logged.

use tgfeed_core::{Reaction, ReactionKind, ReactionSummary, ReactionTally};
use tracing::debug;

/// Prefix of the placeholder token standing in for a custom emoji
const CUSTOM_EMOJI_PREFIX: char = '🎨';

/// Extract the ordered reaction list, or `None` when there is nothing to show
///
/// An empty result collapses to `None`; clients never see an empty array.
pub fn extract_reactions(message_id: i32, summary: Option<&ReactionSummary>) -> Option<Vec<Reaction>> {
    let ReactionSummary::Breakdown(tallies) = summary? else {
        return None;
    };

    let reactions: Vec<Reaction> = tallies.iter().filter_map(to_reaction).collect();
    let skipped = tallies.len() - reactions.len();
    if skipped > 0 {
        debug!(message_id, skipped, "Skipped incomplete reaction entries");
    }
    (!reactions.is_empty()).then_some(reactions)
}

fn to_reaction(tally: &ReactionTally) -> Option<Reaction> {
    let emoji = tally.reaction.as_ref().and_then(token)?;
    let count = tally.count?;
    Some(Reaction::new(emoji, count))
}

/// Display token for a reaction; empty emoticons resolve to nothing
fn token(kind: &ReactionKind) -> Option<String> {
    let token = match kind {
        ReactionKind::Emoji(emoticon) => emoticon.clone(),
        ReactionKind::CustomEmoji { document_id } => format!("{CUSTOM_EMOJI_PREFIX}{document_id}"),
        ReactionKind::Other(raw) => raw.clone(),
    };
    (!token.is_empty()).then_some(token)
}
