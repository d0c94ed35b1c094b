//! Message entity - a channel message as delivered by the messaging backend

use chrono::{DateTime, Utc};

use super::reaction::ReactionSummary;

/// Message entity
///
/// Carries the backend's heterogeneous shapes as closed variants; the service
/// layer flattens it into the outbound response model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub date: DateTime<Utc>,
    /// Plain text body, `None` when the message has no caption or text
    pub text: Option<String>,
    pub media: Option<MediaKind>,
    pub sender: Option<Sender>,
    pub views: Option<i32>,
    pub forwards: Option<i32>,
    pub reactions: Option<ReactionSummary>,
}

impl Message {
    /// Create a text message with no metadata
    pub fn new(id: i32, date: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            id,
            date,
            text: Some(text.into()),
            media: None,
            sender: None,
            views: None,
            forwards: None,
            reactions: None,
        }
    }
}

/// Attributed author of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    User { id: i64, username: Option<String> },
    /// Channel posting as itself (broadcast posts, anonymous admins)
    Channel { id: i64, username: Option<String> },
    /// Basic group or a peer the backend did not describe
    Unknown,
}

impl Sender {
    /// Sender id and handle, absent for unknown senders
    pub fn identity(&self) -> (Option<i64>, Option<String>) {
        match self {
            Self::User { id, username } | Self::Channel { id, username } => {
                (Some(*id), username.clone())
            }
            Self::Unknown => (None, None),
        }
    }
}

/// Non-text payload kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Document,
    WebPage,
    Geo,
    GeoLive,
    Contact,
    Venue,
    Poll,
    Dice,
    Game,
    Invoice,
    Unsupported,
    /// Any other payload, keyed by the backend's type name
    Other(String),
}

impl MediaKind {
    /// The payload's declared type name on the wire
    pub fn type_name(&self) -> &str {
        match self {
            Self::Photo => "MessageMediaPhoto",
            Self::Document => "MessageMediaDocument",
            Self::WebPage => "MessageMediaWebPage",
            Self::Geo => "MessageMediaGeo",
            Self::GeoLive => "MessageMediaGeoLive",
            Self::Contact => "MessageMediaContact",
            Self::Venue => "MessageMediaVenue",
            Self::Poll => "MessageMediaPoll",
            Self::Dice => "MessageMediaDice",
            Self::Game => "MessageMediaGame",
            Self::Invoice => "MessageMediaInvoice",
            Self::Unsupported => "MessageMediaUnsupported",
            Self::Other(name) => name,
        }
    }
}
