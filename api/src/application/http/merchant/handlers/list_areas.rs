use crate::application::http::merchant::responses::{AreaListResponse, SUCCESS_STATUS};
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use merchant_core::domain::merchant::ports::MerchantService;

#[utoipa::path(
    get,
    path = "/area",
    tag = "merchant",
    summary = "List areas",
    responses(
        (status = 200, body = AreaListResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn list_areas(
    State(state): State<AppState>,
) -> Result<Response<AreaListResponse>, ApiError> {
    let areas = state.service.list_areas().await.map_err(ApiError::from)?;

    Ok(Response::OK(AreaListResponse {
        status: SUCCESS_STATUS,
        data: areas,
    }))
}
