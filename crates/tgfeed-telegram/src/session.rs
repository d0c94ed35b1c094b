//! MTProto implementation of the MessagingSession port

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use grammers_client::{Client, Config, InitParams};
use grammers_session::Session;
use grammers_tl_types as tl;
use tgfeed_core::{
    ChannelRef, Dialog, DomainError, DomainResult, Message, MessageQuery, MessagingSession,
    PeerRef,
};
use tracing::{debug, info, instrument, warn};

use crate::client::{TelegramClientConfig, TelegramError};
use crate::error::{map_invocation_error, map_resolve_error};
use crate::mappers::{
    dialog_from_chat, message_from_raw, packed_from_peer, peer_from_packed, raw_message_id,
    PeerDirectory,
};

/// Largest page the history RPC will return
const HISTORY_PAGE_SIZE: u32 = 100;

/// Long-lived, authenticated connection to the messaging backend
pub struct TelegramSession {
    client: Client,
    session_file: PathBuf,
    connected: AtomicBool,
}

impl TelegramSession {
    /// Load (or create) the session file and open the connection
    ///
    /// Flood waits are never slept through; they surface as
    /// `DomainError::FloodWait` so callers see the mandated delay.
    #[instrument(skip(config), fields(session_file = %config.session_file.display()))]
    pub async fn connect(config: &TelegramClientConfig) -> Result<Self, TelegramError> {
        let session = Session::load_file_or_create(&config.session_file).map_err(|source| {
            TelegramError::SessionFile {
                path: config.session_file.clone(),
                source,
            }
        })?;

        let client = Client::connect(Config {
            session,
            api_id: config.api_id,
            api_hash: config.api_hash.clone(),
            params: InitParams {
                flood_sleep_threshold: 0,
                ..InitParams::default()
            },
        })
        .await
        .map_err(|e| TelegramError::Connect(e.to_string()))?;

        info!("Connected to Telegram");

        Ok(Self {
            client,
            session_file: config.session_file.clone(),
            connected: AtomicBool::new(true),
        })
    }

    /// Whether the stored session belongs to a signed-in account
    pub async fn is_authorized(&self) -> Result<bool, TelegramError> {
        self.client
            .is_authorized()
            .await
            .map_err(|e| TelegramError::Invocation(e.to_string()))
    }

    /// Fail unless the session is signed in
    pub async fn ensure_authorized(&self) -> Result<(), TelegramError> {
        if self.is_authorized().await? {
            Ok(())
        } else {
            Err(TelegramError::NotAuthorized)
        }
    }

    /// Underlying client, for interactive sign-in
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Write the session state to its file
    pub fn save(&self) -> Result<(), TelegramError> {
        self.client
            .session()
            .save_to_file(&self.session_file)
            .map_err(|source| TelegramError::SessionFile {
                path: self.session_file.clone(),
                source,
            })
    }

    fn ensure_connected(&self) -> DomainResult<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(DomainError::Disconnected)
        }
    }

    async fn find_dialog_peer(&self, bare_id: i64, target: &ChannelRef) -> DomainResult<PeerRef> {
        let mut dialogs = self.client.iter_dialogs();
        while let Some(dialog) = dialogs.next().await.map_err(map_invocation_error)? {
            let chat = dialog.chat();
            if chat.id() == bare_id {
                return Ok(peer_from_packed(chat.pack()));
            }
        }
        Err(DomainError::channel_not_found(format!(
            "Cannot find any entity corresponding to \"{target}\""
        )))
    }

    async fn history_page(
        &self,
        peer: &PeerRef,
        offset_id: i32,
        limit: u32,
        query: &MessageQuery,
    ) -> DomainResult<Option<(Vec<tl::enums::Message>, PeerDirectory)>> {
        let request = tl::functions::messages::GetHistory {
            peer: packed_from_peer(peer).to_input_peer(),
            offset_id,
            offset_date: 0,
            add_offset: 0,
            limit: limit as i32,
            max_id: query.max_id.unwrap_or(0),
            min_id: query.min_id.unwrap_or(0),
            hash: 0,
        };

        let (messages, users, chats) =
            match self.client.invoke(&request).await.map_err(map_invocation_error)? {
                tl::enums::messages::Messages::Messages(m) => (m.messages, m.users, m.chats),
                tl::enums::messages::Messages::Slice(m) => (m.messages, m.users, m.chats),
                tl::enums::messages::Messages::ChannelMessages(m) => (m.messages, m.users, m.chats),
                tl::enums::messages::Messages::NotModified(_) => return Ok(None),
            };

        Ok(Some((messages, PeerDirectory::from_raw(&users, &chats))))
    }
}

#[async_trait]
impl MessagingSession for TelegramSession {
    #[instrument(skip(self))]
    async fn dialogs(&self) -> DomainResult<Vec<Dialog>> {
        self.ensure_connected()?;

        let mut dialogs = Vec::new();
        let mut iter = self.client.iter_dialogs();
        while let Some(dialog) = iter.next().await.map_err(map_invocation_error)? {
            dialogs.push(dialog_from_chat(dialog.chat()));
        }

        debug!(count = dialogs.len(), "Dialogs fetched");
        Ok(dialogs)
    }

    #[instrument(skip(self), fields(target = %target))]
    async fn resolve(&self, target: &ChannelRef) -> DomainResult<PeerRef> {
        self.ensure_connected()?;

        match target {
            ChannelRef::Username(username) => self
                .client
                .resolve_username(username)
                .await
                .map_err(map_resolve_error)?
                .map(|chat| peer_from_packed(chat.pack()))
                .ok_or_else(|| {
                    DomainError::channel_not_found(format!(
                        "No channel has \"{username}\" as username"
                    ))
                }),
            ChannelRef::Id(_) => match target.bare_id() {
                Some(bare_id) => self.find_dialog_peer(bare_id, target).await,
                None => Err(DomainError::channel_not_found(format!(
                    "Cannot find any entity corresponding to \"{target}\""
                ))),
            },
        }
    }

    #[instrument(skip(self), fields(peer_id = peer.id, limit = query.limit))]
    async fn messages(&self, peer: &PeerRef, query: &MessageQuery) -> DomainResult<Vec<Message>> {
        self.ensure_connected()?;

        let wanted = query.limit as usize;
        let mut collected = Vec::with_capacity(wanted.min(HISTORY_PAGE_SIZE as usize));
        let mut offset_id = query.offset_id.unwrap_or(0);

        while collected.len() < wanted {
            let page_size = HISTORY_PAGE_SIZE.min((wanted - collected.len()) as u32);
            let Some((raw, peers)) = self.history_page(peer, offset_id, page_size, query).await?
            else {
                break;
            };

            let fetched = raw.len();
            let last_id = raw.last().map(raw_message_id);
            let remaining = wanted - collected.len();
            collected.extend(
                raw.into_iter()
                    .filter_map(|m| message_from_raw(m, &peers))
                    .take(remaining),
            );

            match last_id {
                Some(id) if fetched >= page_size as usize && id != offset_id => offset_id = id,
                _ => break,
            }
        }

        debug!(count = collected.len(), "History fetched");
        Ok(collected)
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    async fn disconnect(&self) -> DomainResult<()> {
        if !self.connected.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Err(e) = self.save() {
            warn!(error = %e, "Failed to persist session on disconnect");
            return Err(DomainError::backend(e));
        }
        info!("Telegram session saved and released");
        Ok(())
    }
}
