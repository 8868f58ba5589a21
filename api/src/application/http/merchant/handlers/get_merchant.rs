use crate::application::http::merchant::responses::{MerchantResponse, SUCCESS_STATUS};
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use merchant_core::domain::merchant::ports::MerchantService;

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "merchant",
    summary = "Get a merchant",
    description = "Returns one merchant with its images. A non-numeric id is reported as not found.",
    params(
        ("id" = String, Path, description = "Merchant id")
    ),
    responses(
        (status = 200, body = MerchantResponse),
        (status = 404, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_merchant(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<MerchantResponse>, ApiError> {
    let id = id.parse::<i64>().map_err(|_| ApiError::not_found())?;

    let merchant = state
        .service
        .get_merchant(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MerchantResponse {
        status: SUCCESS_STATUS,
        data: merchant,
    }))
}
