use axum::{extract::FromRequestParts, http::request::Parts};
use merchant_core::domain::merchant::value_objects::MerchantQuery;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Collects every query pair, in request order, into a [`MerchantQuery`].
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     MerchantQueryExtractor(query): MerchantQueryExtractor,
/// ) -> Result<Response<MerchantListResponse>, ApiError> {
///     // query.filters, query.keyword, query.page, query.offset
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MerchantQueryExtractor(pub MerchantQuery);

impl<S> FromRequestParts<S> for MerchantQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("invalid query string: {}", e)))?;

        Ok(MerchantQueryExtractor(MerchantQuery::from_pairs(pairs)))
    }
}
