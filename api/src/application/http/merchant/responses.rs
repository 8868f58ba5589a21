use merchant_core::domain::merchant::{
    entities::{Area, Category, Merchant},
    value_objects::Paginated,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SUCCESS_STATUS: i32 = 1;

/// A list of merchants. `page` and `offset` echo the applied window.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MerchantListResponse {
    pub status: i32,
    pub data: Vec<Merchant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub total: i64,
}

impl From<Paginated<Merchant>> for MerchantListResponse {
    fn from(merchants: Paginated<Merchant>) -> Self {
        Self {
            status: SUCCESS_STATUS,
            data: merchants.items,
            page: merchants.pagination.map(|p| p.page),
            offset: merchants.pagination.map(|p| p.offset),
            total: merchants.total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MerchantResponse {
    pub status: i32,
    pub data: Merchant,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AreaListResponse {
    pub status: i32,
    pub data: Vec<Area>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryListResponse {
    pub status: i32,
    pub data: Vec<Category>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
