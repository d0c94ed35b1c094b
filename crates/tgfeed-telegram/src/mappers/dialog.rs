//! Dialog mapping

use grammers_client::types::Chat;
use grammers_tl_types as tl;
use tgfeed_core::{Channel, Dialog};

pub fn channel_from_raw(raw: &tl::types::Channel) -> Channel {
    Channel {
        id: raw.id,
        title: raw.title.clone(),
        username: raw.username.clone(),
        participants_count: raw.participants_count,
    }
}

/// Classify a dialog's chat; supergroups are channels on the wire
pub fn dialog_from_chat(chat: &Chat) -> Dialog {
    match chat {
        Chat::Channel(channel) => Dialog::Channel(channel_from_raw(&channel.raw)),
        Chat::Group(group) => match &group.raw {
            tl::enums::Chat::Channel(raw) => Dialog::Channel(channel_from_raw(raw)),
            _ => Dialog::Group {
                id: chat.id(),
                title: chat.name().to_string(),
            },
        },
        Chat::User(user) => Dialog::User {
            id: user.id(),
            username: user.username().map(str::to_string),
        },
    }
}
