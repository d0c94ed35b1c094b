//! Reaction aggregate mapping

use grammers_tl_types as tl;
use tgfeed_core::{ReactionKind, ReactionSummary, ReactionTally};

pub fn reaction_kind(reaction: &tl::enums::Reaction) -> ReactionKind {
    match reaction {
        tl::enums::Reaction::Emoji(emoji) => ReactionKind::Emoji(emoji.emoticon.clone()),
        tl::enums::Reaction::CustomEmoji(custom) => ReactionKind::CustomEmoji {
            document_id: custom.document_id,
        },
        other => ReactionKind::Other(format!("{other:?}")),
    }
}

fn reaction_tally(count: &tl::enums::ReactionCount) -> ReactionTally {
    let tl::enums::ReactionCount::Count(count) = count;
    ReactionTally::new(reaction_kind(&count.reaction), count.count)
}

/// Map the raw aggregate; an aggregate without results has no breakdown
pub fn reaction_summary(reactions: &tl::enums::MessageReactions) -> ReactionSummary {
    let tl::enums::MessageReactions::Reactions(reactions) = reactions;
    if reactions.results.is_empty() {
        ReactionSummary::Opaque
    } else {
        ReactionSummary::Breakdown(reactions.results.iter().map(reaction_tally).collect())
    }
}
