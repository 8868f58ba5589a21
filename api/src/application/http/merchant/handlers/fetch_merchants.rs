use crate::application::http::merchant::{
    responses::MerchantListResponse, validators::PaginationQuery,
};
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use merchant_core::domain::merchant::{ports::MerchantService, value_objects::FetchMerchantsInput};

#[utoipa::path(
    get,
    path = "/merchants",
    tag = "merchant",
    summary = "List merchants",
    description = "Lists every merchant ordered by id. The window applies only when both `page` and `offset` are given.",
    params(PaginationQuery),
    responses(
        (status = 200, body = MerchantListResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn fetch_merchants(
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
) -> Result<Response<MerchantListResponse>, ApiError> {
    let merchants = state
        .service
        .fetch_merchants(FetchMerchantsInput {
            page: query.page,
            offset: query.offset,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MerchantListResponse::from(merchants)))
}
