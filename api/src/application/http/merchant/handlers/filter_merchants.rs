use crate::application::http::merchant::responses::MerchantListResponse;
use crate::application::http::query_extractor::MerchantQueryExtractor;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use merchant_core::domain::merchant::ports::MerchantService;

#[utoipa::path(
    get,
    path = "/filter",
    tag = "merchant",
    summary = "Filter merchants",
    description = "Any merchant field may be passed as a query parameter, in snake_case or camelCase. A comma-separated value matches any of its parts and `null` or an empty value is ignored.",
    params(
        ("areaId" = Option<String>, Query, description = "Area id, or a comma-separated list"),
        ("categoryId" = Option<String>, Query, description = "Category id, or a comma-separated list"),
        ("keyword" = Option<String>, Query, description = "Case-insensitive substring of the name"),
        ("page" = Option<String>, Query, description = "1-based page number"),
        ("offset" = Option<String>, Query, description = "Page size")
    ),
    responses(
        (status = 200, body = MerchantListResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn filter_merchants(
    State(state): State<AppState>,
    MerchantQueryExtractor(query): MerchantQueryExtractor,
) -> Result<Response<MerchantListResponse>, ApiError> {
    let merchants = state
        .service
        .filter_merchants(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MerchantListResponse::from(merchants)))
}
