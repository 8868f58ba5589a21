use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Raw window parameters; numeric validation happens in the core.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// 1-based page number
    pub page: Option<String>,
    /// Page size
    pub offset: Option<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct SearchQuery {
    #[validate(length(max = 255, message = "keyword must be at most 255 characters"))]
    pub keyword: Option<String>,
}
