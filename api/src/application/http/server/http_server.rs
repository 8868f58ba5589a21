use std::sync::Arc;

use crate::application::http::index::index_routes;
use crate::application::http::merchant::router::merchant_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use merchant_core::{application::create_service, domain::common::MerchantConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let merchant_config = MerchantConfig::from(args.as_ref().clone());
    let service = create_service(merchant_config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application, with Prometheus metrics.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let metrics_path = format!("{}/metrics", state.args.server.root_path);

    let router = app(state)?
        .route(&metrics_path, get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);

    Ok(router)
}

/// Routes, docs, tracing and CORS. The metrics recorder is process-global
/// and only installed by [`router`].
pub fn app(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .allow_credentials(true);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);
    let api_docs = openapi.clone();

    let router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .route(
            &api_docs_url,
            get(move || {
                let api_docs = api_docs.clone();
                async move { Json(api_docs) }
            }),
        )
        .merge(merchant_routes(state.clone()))
        .merge(index_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::Parser;
    use merchant_core::{
        domain::common::services::Service,
        entity::{area, mb_merchant},
        infrastructure::merchant::{SqlMerchantRepository, sql::COUNT_ALIAS},
    };
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, Value};
    use serde_json::json;

    use super::*;
    use crate::application::http::index::GREETING;

    fn server(db: DatabaseConnection, extra_args: &[&str]) -> TestServer {
        let args = Args::try_parse_from(std::iter::once("merchant-api").chain(extra_args.iter().copied()))
            .unwrap();
        let service = Service::new(
            SqlMerchantRepository::new(Arc::new(db)),
            Duration::from_secs(2),
        );

        TestServer::new(app(AppState::new(Arc::new(args), service)).unwrap()).unwrap()
    }

    fn merchant_model(id: i64) -> mb_merchant::Model {
        mb_merchant::Model {
            mb_merchant_id: id,
            name: Some(format!("Merchant {id}")),
            address: Some(String::new()),
            latitude: None,
            longitude: None,
            phone: None,
            description: None,
            mb_category_id: Some(2),
            area_id: Some(1),
            image: None,
            delivery: Some(0),
            time_start: None,
            time_end: None,
            facebook: None,
        }
    }

    fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([(COUNT_ALIAS, Value::BigInt(Some(count)))])
    }

    #[tokio::test]
    async fn index_greets() {
        let server = server(MockDatabase::new(DatabaseBackend::MySql).into_connection(), &[]);

        let response = server.get("/").await;

        response.assert_status_ok();
        assert_eq!(response.text(), GREETING);
    }

    #[tokio::test]
    async fn filter_returns_requested_window_and_total() {
        let page: Vec<mb_merchant::Model> = (11..=20).map(merchant_model).collect();
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([page])
            .append_query_results([[count_row(25)]])
            .into_connection();
        let server = server(db, &[]);

        let response = server
            .get("/merchant/filter")
            .add_query_param("areaId", "1")
            .add_query_param("page", "2")
            .add_query_param("offset", "10")
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], json!(1));
        assert_eq!(body["page"], json!(2));
        assert_eq!(body["offset"], json!(10));
        assert_eq!(body["total"], json!(25));
        let ids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|merchant| merchant["mb_merchant_id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, (11..=20).collect::<Vec<i64>>());
        assert_eq!(body["data"][0]["address"], json!(""));
        assert_eq!(body["data"][0]["phone"], json!(null));
    }

    #[tokio::test]
    async fn fetch_without_window_omits_page_fields() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![merchant_model(1)]])
            .append_query_results([[count_row(1)]])
            .into_connection();
        let server = server(db, &[]);

        let response = server.get("/merchant/merchants").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["total"], json!(1));
        assert!(body.get("page").is_none());
        assert!(body.get("offset").is_none());
    }

    #[tokio::test]
    async fn invalid_page_is_a_bad_request() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
        let server = server(db, &[]);

        let response = server
            .get("/merchant/merchants")
            .add_query_param("page", "abc")
            .add_query_param("offset", "10")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "page must be a number" }));
    }

    #[tokio::test]
    async fn unknown_filter_field_is_a_bad_request() {
        let server = server(MockDatabase::new(DatabaseBackend::MySql).into_connection(), &[]);

        let response = server
            .get("/merchant/filter")
            .add_query_param("color", "red")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "unknown filter field: color" }));
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
        let server = server(db, &[]);

        let response = server.get("/merchant/abc").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "message": "Your requested Item is not found" }));
    }

    #[tokio::test]
    async fn missing_merchant_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<mb_merchant::Model>::new()])
            .into_connection();
        let server = server(db, &[]);

        let response = server.get("/merchant/7").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn search_without_keyword_returns_hint() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
        let server = server(db, &[]);

        let response = server.get("/merchant/search").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "message": "Please enter a keyword to search" }));
    }

    #[tokio::test]
    async fn storage_failure_is_an_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let server = server(db, &[]);

        let response = server.get("/merchant/categories").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "message": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn routes_honor_root_path() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![area::Model {
                area_id: 1,
                name: Some("District 1".to_string()),
                region_id: None,
                description: None,
                image: None,
            }]])
            .into_connection();
        let server = server(db, &["--server-root-path", "/api"]);

        let response = server.get("/api/merchant/area").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "status": 1,
            "data": [{
                "area_id": 1,
                "region_id": null,
                "name": "District 1",
                "description": null,
                "image": null
            }]
        }));
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let server = server(MockDatabase::new(DatabaseBackend::MySql).into_connection(), &[]);

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert!(body["paths"].get("/merchant/filter").is_some());
    }
}
