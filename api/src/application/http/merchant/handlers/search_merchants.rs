use crate::application::http::merchant::{
    responses::{MerchantListResponse, MessageResponse},
    validators::SearchQuery,
};
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use merchant_core::domain::merchant::{ports::MerchantService, value_objects::EMPTY_KEYWORD_MESSAGE};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum SearchMerchantsResponse {
    Results(MerchantListResponse),
    Message(MessageResponse),
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "merchant",
    summary = "Search merchants by name",
    description = "Case-insensitive substring search on the merchant name. Without a keyword a hint message is returned instead.",
    params(SearchQuery),
    responses(
        (status = 200, body = SearchMerchantsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn search_merchants(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Response<SearchMerchantsResponse>, ApiError> {
    query
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let keyword = query.keyword.unwrap_or_default();
    if keyword.trim().is_empty() {
        return Ok(Response::OK(SearchMerchantsResponse::Message(
            MessageResponse {
                message: EMPTY_KEYWORD_MESSAGE.to_string(),
            },
        )));
    }

    let merchants = state
        .service
        .search_merchants(keyword)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchMerchantsResponse::Results(
        MerchantListResponse::from(merchants),
    )))
}
