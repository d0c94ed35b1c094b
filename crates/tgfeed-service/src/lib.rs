//! # tgfeed-service
//!
//! Application layer containing the retrieval and translation use cases,
//! their DTOs, and the dependency container the API layer builds them from.

pub mod dto;
pub mod services;

pub use dto::{
    ChannelResponse, HealthResponse, MessageResponse, ReactionResponse, ResolvedMessage,
    RootResponse, TranslateRequest, TranslateResponse,
};
pub use services::{
    extract_reactions, resolve_text, ChannelService, MessageService, RussianAutoTranslator,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, TranslationService,
};
