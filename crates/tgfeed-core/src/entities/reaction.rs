//! Reaction entities - emoji tallies attached to a message

/// Reaction as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub emoji: String,
    pub count: i32,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(emoji: impl Into<String>, count: i32) -> Self {
        Self {
            emoji: emoji.into(),
            count,
        }
    }
}

/// What a single reaction entry refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionKind {
    /// Plain unicode emoticon
    Emoji(String),
    /// Custom emoji sticker referenced by document id
    CustomEmoji { document_id: i64 },
    /// Any other reaction, rendered by the backend adapter
    Other(String),
}

/// One entry of the per-reaction breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionTally {
    pub reaction: Option<ReactionKind>,
    pub count: Option<i32>,
}

impl ReactionTally {
    /// Create a complete tally entry
    pub fn new(reaction: ReactionKind, count: i32) -> Self {
        Self {
            reaction: Some(reaction),
            count: Some(count),
        }
    }
}

/// Raw reaction aggregate of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionSummary {
    /// Per-reaction breakdown, in backend order
    Breakdown(Vec<ReactionTally>),
    /// Aggregate present but without a per-reaction breakdown
    Opaque,
}
