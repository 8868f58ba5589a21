use crate::application::http::merchant::responses::{CategoryListResponse, SUCCESS_STATUS};
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use merchant_core::domain::merchant::ports::MerchantService;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "merchant",
    summary = "List merchant categories",
    responses(
        (status = 200, body = CategoryListResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Response<CategoryListResponse>, ApiError> {
    let categories = state
        .service
        .list_categories()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CategoryListResponse {
        status: SUCCESS_STATUS,
        data: categories,
    }))
}
