//! History message mapping

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use grammers_tl_types as tl;
use tgfeed_core::{MediaKind, Message, Sender};

use super::reaction::reaction_summary;

/// Convert a wire timestamp (unix seconds)
pub fn timestamp(date: i32) -> DateTime<Utc> {
    DateTime::from_timestamp(i64::from(date), 0).unwrap_or_default()
}

/// Id of any raw message variant
pub fn raw_message_id(message: &tl::enums::Message) -> i32 {
    match message {
        tl::enums::Message::Empty(m) => m.id,
        tl::enums::Message::Message(m) => m.id,
        tl::enums::Message::Service(m) => m.id,
    }
}

pub fn media_kind(media: &tl::enums::MessageMedia) -> Option<MediaKind> {
    use tl::enums::MessageMedia as M;

    let kind = match media {
        M::Empty => return None,
        M::Photo(_) => MediaKind::Photo,
        M::Document(_) => MediaKind::Document,
        M::WebPage(_) => MediaKind::WebPage,
        M::Geo(_) => MediaKind::Geo,
        M::GeoLive(_) => MediaKind::GeoLive,
        M::Contact(_) => MediaKind::Contact,
        M::Venue(_) => MediaKind::Venue,
        M::Poll(_) => MediaKind::Poll,
        M::Dice(_) => MediaKind::Dice,
        M::Game(_) => MediaKind::Game,
        M::Invoice(_) => MediaKind::Invoice,
        M::Unsupported => MediaKind::Unsupported,
        other => MediaKind::Other(format!("MessageMedia{}", variant_name(other))),
    };
    Some(kind)
}

fn variant_name(value: &impl std::fmt::Debug) -> String {
    let rendered = format!("{value:?}");
    rendered
        .split(['(', ' ', '{'])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Handles of the users and channels delivered alongside a history page
#[derive(Debug, Default)]
pub struct PeerDirectory {
    users: HashMap<i64, Option<String>>,
    channels: HashMap<i64, Option<String>>,
}

impl PeerDirectory {
    pub fn from_raw(users: &[tl::enums::User], chats: &[tl::enums::Chat]) -> Self {
        let mut directory = Self::default();
        for user in users {
            match user {
                tl::enums::User::User(u) => directory.insert_user(u.id, u.username.clone()),
                tl::enums::User::Empty(u) => directory.insert_user(u.id, None),
            }
        }
        for chat in chats {
            match chat {
                tl::enums::Chat::Channel(c) => directory.insert_channel(c.id, c.username.clone()),
                tl::enums::Chat::ChannelForbidden(c) => directory.insert_channel(c.id, None),
                _ => {}
            }
        }
        directory
    }

    pub(crate) fn insert_user(&mut self, id: i64, username: Option<String>) {
        self.users.insert(id, username);
    }

    pub(crate) fn insert_channel(&mut self, id: i64, username: Option<String>) {
        self.channels.insert(id, username);
    }

    /// Attribute a message; posts without an author belong to the chat itself
    pub fn sender(&self, from_id: Option<&tl::enums::Peer>, peer_id: &tl::enums::Peer) -> Sender {
        match from_id.unwrap_or(peer_id) {
            tl::enums::Peer::User(p) => Sender::User {
                id: p.user_id,
                username: self.users.get(&p.user_id).cloned().flatten(),
            },
            tl::enums::Peer::Channel(p) => Sender::Channel {
                id: p.channel_id,
                username: self.channels.get(&p.channel_id).cloned().flatten(),
            },
            tl::enums::Peer::Chat(_) => Sender::Unknown,
        }
    }
}

/// Map one raw history entry; empty placeholders are dropped
pub fn message_from_raw(raw: tl::enums::Message, peers: &PeerDirectory) -> Option<Message> {
    match raw {
        tl::enums::Message::Empty(_) => None,
        tl::enums::Message::Message(m) => Some(Message {
            id: m.id,
            date: timestamp(m.date),
            sender: Some(peers.sender(m.from_id.as_ref(), &m.peer_id)),
            media: m.media.as_ref().and_then(media_kind),
            reactions: m.reactions.as_ref().map(reaction_summary),
            text: Some(m.message),
            views: m.views,
            forwards: m.forwards,
        }),
        tl::enums::Message::Service(m) => Some(Message {
            id: m.id,
            date: timestamp(m.date),
            text: None,
            media: None,
            sender: Some(peers.sender(m.from_id.as_ref(), &m.peer_id)),
            views: None,
            forwards: None,
            reactions: None,
        }),
    }
}
