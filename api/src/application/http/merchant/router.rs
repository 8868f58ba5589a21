use super::handlers::fetch_merchants::{__path_fetch_merchants, fetch_merchants};
use super::handlers::filter_merchants::{__path_filter_merchants, filter_merchants};
use super::handlers::get_merchant::{__path_get_merchant, get_merchant};
use super::handlers::list_areas::{__path_list_areas, list_areas};
use super::handlers::list_categories::{__path_list_categories, list_categories};
use super::handlers::search_merchants::{__path_search_merchants, search_merchants};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    fetch_merchants,
    get_merchant,
    filter_merchants,
    search_merchants,
    list_areas,
    list_categories
))]
pub struct MerchantApiDoc;

pub fn merchant_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/merchant/merchants", root_path),
            get(fetch_merchants),
        )
        .route(
            &format!("{}/merchant/filter", root_path),
            get(filter_merchants),
        )
        .route(
            &format!("{}/merchant/search", root_path),
            get(search_merchants),
        )
        .route(&format!("{}/merchant/area", root_path), get(list_areas))
        .route(
            &format!("{}/merchant/categories", root_path),
            get(list_categories),
        )
        .route(
            &format!("{}/merchant/{{id}}", root_path),
            get(get_merchant),
        )
}
