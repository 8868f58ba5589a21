use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    merchant::{
        entities::{Area, Category, Image, Merchant},
        query::Predicate,
        value_objects::{FetchMerchantsInput, MerchantQuery, Paginated, Pagination},
    },
};

pub trait MerchantService: Send + Sync {
    fn fetch_merchants(
        &self,
        input: FetchMerchantsInput,
    ) -> impl Future<Output = Result<Paginated<Merchant>, CoreError>> + Send;

    fn filter_merchants(
        &self,
        query: MerchantQuery,
    ) -> impl Future<Output = Result<Paginated<Merchant>, CoreError>> + Send;

    fn get_merchant(&self, id: i64) -> impl Future<Output = Result<Merchant, CoreError>> + Send;

    fn search_merchants(
        &self,
        keyword: String,
    ) -> impl Future<Output = Result<Paginated<Merchant>, CoreError>> + Send;

    fn list_areas(&self) -> impl Future<Output = Result<Vec<Area>, CoreError>> + Send;

    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;
}

pub trait MerchantRepository: Send + Sync {
    /// Runs the fetch under `predicate` and `pagination`, then the count
    /// under `predicate` alone. The two reads are not transactionally linked.
    fn fetch_all(
        &self,
        predicate: Predicate,
        pagination: Option<Pagination>,
    ) -> impl Future<Output = Result<Paginated<Merchant>, CoreError>> + Send;

    /// Fails with [`CoreError::NotFound`] when no non-deleted row matches.
    fn get_by_id(&self, id: i64) -> impl Future<Output = Result<Merchant, CoreError>> + Send;

    fn get_images_by_merchant_id(
        &self,
        merchant_id: i64,
    ) -> impl Future<Output = Result<Vec<Image>, CoreError>> + Send;

    fn search(
        &self,
        keyword: String,
    ) -> impl Future<Output = Result<Paginated<Merchant>, CoreError>> + Send;

    fn list_areas(&self) -> impl Future<Output = Result<Vec<Area>, CoreError>> + Send;

    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;
}
