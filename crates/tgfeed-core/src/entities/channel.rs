//! Channel entity - a broadcast-style conversation visible to the session

/// Channel entity
///
/// Read-only view of a channel as the backend reports it for the current
/// request. Supergroups are channels on the wire and are reported here too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: i64,
    pub title: String,
    pub username: Option<String>,
    pub participants_count: Option<i32>,
}

impl Channel {
    /// Create a channel with no handle and no participant count
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            username: None,
            participants_count: None,
        }
    }

    /// Set the public handle
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the participant count
    #[must_use]
    pub fn with_participants(mut self, count: i32) -> Self {
        self.participants_count = Some(count);
        self
    }
}

/// A conversation the session participates in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Broadcast channel or supergroup
    Channel(Channel),
    /// Basic (non-channel) group
    Group { id: i64, title: String },
    /// Direct conversation with a user or bot
    User { id: i64, username: Option<String> },
}

impl Dialog {
    /// Keep only channel-type dialogs
    pub fn into_channel(self) -> Option<Channel> {
        match self {
            Self::Channel(channel) => Some(channel),
            Self::Group { .. } | Self::User { .. } => None,
        }
    }
}
