//! Test fixtures and response shapes

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tgfeed_core::{
    Channel, Dialog, MediaKind, Message, ReactionKind, ReactionSummary, ReactionTally, Sender,
};

pub const NEWS_CHANNEL_ID: i64 = 1_001_234;
pub const NEWS_USERNAME: &str = "worldnews";

fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Dialogs of every kind; only the two channels should be listed
pub fn sample_dialogs() -> Vec<Dialog> {
    vec![
        Dialog::Channel(
            Channel::new(NEWS_CHANNEL_ID, "World News")
                .with_username(NEWS_USERNAME)
                .with_participants(1200),
        ),
        Dialog::Group {
            id: 555,
            title: "Family".to_string(),
        },
        Dialog::User {
            id: 42,
            username: Some("friend".to_string()),
        },
        Dialog::Channel(Channel::new(2_002, "Private Feed")),
    ]
}

/// Channel history, newest first
pub fn sample_history() -> Vec<Message> {
    let channel_sender = Sender::Channel {
        id: NEWS_CHANNEL_ID,
        username: Some(NEWS_USERNAME.to_string()),
    };

    vec![
        Message {
            id: 30,
            date: at(30),
            text: Some("Привет, мир".to_string()),
            media: None,
            sender: Some(channel_sender.clone()),
            views: Some(900),
            forwards: Some(4),
            reactions: Some(ReactionSummary::Breakdown(vec![
                ReactionTally::new(ReactionKind::Emoji("👍".to_string()), 5),
                ReactionTally::new(ReactionKind::CustomEmoji { document_id: 77 }, 2),
            ])),
        },
        Message {
            id: 20,
            date: at(20),
            text: Some(String::new()),
            media: Some(MediaKind::Photo),
            sender: Some(channel_sender),
            views: Some(850),
            forwards: None,
            reactions: Some(ReactionSummary::Opaque),
        },
        Message {
            sender: Some(Sender::User {
                id: 42,
                username: None,
            }),
            ..Message::new(10, at(10), "Good morning")
        },
    ]
}

/// Explicit translation request body
#[derive(Debug, Serialize)]
pub struct TranslateBody {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl TranslateBody {
    pub fn online(text: &str) -> Self {
        Self {
            text: text.to_string(),
            source_lang: None,
            target_lang: None,
            mode: None,
        }
    }

    pub fn offline(text: &str, source: &str, target: &str) -> Self {
        Self {
            text: text.to_string(),
            source_lang: Some(source.to_string()),
            target_lang: Some(target.to_string()),
            mode: Some("offline".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChannelBody {
    pub id: i64,
    pub title: String,
    pub username: Option<String>,
    pub participants_count: Option<i32>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ReactionBody {
    pub emoji: String,
    pub count: i32,
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub id: i32,
    pub date: String,
    pub text: String,
    pub sender_id: Option<i64>,
    pub sender_username: Option<String>,
    pub views: Option<i32>,
    pub forwards: Option<i32>,
    pub reactions: Option<Vec<ReactionBody>>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResult {
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub mode: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
