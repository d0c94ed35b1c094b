//! History query extractor
//!
//! Extracts `limit`, the id cursors and the `translate` flag from the query
//! string of the message retrieval endpoints.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use tgfeed_core::MessageQuery;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: u32 = 50;

/// Raw history query parameters
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset_id: Option<String>,
    #[serde(default)]
    pub min_id: Option<String>,
    #[serde(default)]
    pub max_id: Option<String>,
    #[serde(default)]
    pub translate: Option<String>,
}

/// Parsed history query
///
/// The limit range is enforced by the message service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub query: MessageQuery,
    pub translate: bool,
}

fn parse_cursor(name: &str, value: Option<String>) -> Result<Option<i32>, ApiError> {
    value
        .map(|s| {
            s.trim()
                .parse::<i32>()
                .map_err(|_| ApiError::invalid_query(format!("'{name}' must be an integer")))
        })
        .transpose()
}

fn parse_flag(value: &str) -> Result<bool, ApiError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ApiError::invalid_query("'translate' must be a boolean")),
    }
}

impl TryFrom<HistoryParams> for HistoryQuery {
    type Error = ApiError;

    fn try_from(params: HistoryParams) -> Result<Self, Self::Error> {
        let limit = params
            .limit
            .map(|s| {
                s.trim()
                    .parse::<u32>()
                    .map_err(|_| ApiError::invalid_query("'limit' must be a positive integer"))
            })
            .transpose()?
            .unwrap_or(DEFAULT_LIMIT);

        let translate = params.translate.as_deref().map(parse_flag).transpose()?.unwrap_or(true);

        Ok(Self {
            query: MessageQuery {
                limit,
                offset_id: parse_cursor("offset_id", params.offset_id)?,
                min_id: parse_cursor("min_id", params.min_id)?,
                max_id: parse_cursor("max_id", params.max_id)?,
            },
            translate,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for HistoryQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HistoryParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        HistoryQuery::try_from(params)
    }
}
