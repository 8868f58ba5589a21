use std::future::Future;

use tracing::warn;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    merchant::{
        entities::{Area, Category, Merchant},
        ports::{MerchantRepository, MerchantService},
        query::{Predicate, compile, compile_pagination},
        value_objects::{EMPTY_KEYWORD_MESSAGE, FetchMerchantsInput, MerchantQuery, Paginated},
    },
};

impl<M> Service<M>
where
    M: MerchantRepository,
{
    /// Dropping the query future on elapse cancels it at the driver.
    async fn with_deadline<T, F>(&self, operation: &'static str, future: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        match tokio::time::timeout(self.timeout, future).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "merchant query exceeded its deadline"
                );
                Err(CoreError::Timeout)
            }
        }
    }
}

impl<M> MerchantService for Service<M>
where
    M: MerchantRepository,
{
    async fn fetch_merchants(
        &self,
        input: FetchMerchantsInput,
    ) -> Result<Paginated<Merchant>, CoreError> {
        let pagination = compile_pagination(input.page.as_deref(), input.offset.as_deref())?;

        self.with_deadline(
            "fetch_merchants",
            self.merchant_repository
                .fetch_all(Predicate::new(), pagination),
        )
        .await
    }

    async fn filter_merchants(
        &self,
        query: MerchantQuery,
    ) -> Result<Paginated<Merchant>, CoreError> {
        let compiled = compile(&query)?;

        self.with_deadline(
            "filter_merchants",
            self.merchant_repository
                .fetch_all(compiled.predicate, compiled.pagination),
        )
        .await
    }

    async fn get_merchant(&self, id: i64) -> Result<Merchant, CoreError> {
        self.with_deadline("get_merchant", self.merchant_repository.get_by_id(id))
            .await
    }

    async fn search_merchants(&self, keyword: String) -> Result<Paginated<Merchant>, CoreError> {
        if keyword.trim().is_empty() {
            return Err(CoreError::invalid_argument(EMPTY_KEYWORD_MESSAGE));
        }

        self.with_deadline(
            "search_merchants",
            self.merchant_repository.search(keyword),
        )
        .await
    }

    async fn list_areas(&self) -> Result<Vec<Area>, CoreError> {
        self.with_deadline("list_areas", self.merchant_repository.list_areas())
            .await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.with_deadline(
            "list_categories",
            self.merchant_repository.list_categories(),
        )
        .await
    }
}
