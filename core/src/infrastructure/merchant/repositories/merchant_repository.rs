use std::sync::Arc;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter,
    QueryOrder, Statement,
};
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    merchant::{
        entities::{Area, Category, Image, Merchant},
        ports::MerchantRepository,
        query::Predicate,
        value_objects::{Paginated, Pagination},
    },
};
use crate::entity::{
    area::{Column as AreaColumn, Entity as AreaEntity},
    mb_merchant::Entity as MerchantEntity,
    mb_merchant_category::{Column as CategoryColumn, Entity as CategoryEntity},
    mb_merchant_image::{Column as ImageColumn, Entity as ImageEntity},
};
use crate::infrastructure::merchant::sql::{COUNT_ALIAS, count_merchants, select_merchants};

#[derive(Debug, Clone)]
pub struct SqlMerchantRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SqlMerchantRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    /// Maps every row or fails as a whole.
    async fn query_merchants(&self, statement: Statement) -> Result<Vec<Merchant>, CoreError> {
        let merchants = MerchantEntity::find()
            .from_raw_sql(statement)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch merchants: {}", e);
                CoreError::StorageError
            })?
            .into_iter()
            .map(Merchant::from)
            .collect::<Vec<Merchant>>();

        Ok(merchants)
    }

    async fn query_count(&self, statement: Statement) -> Result<i64, CoreError> {
        let row = self.db.query_one(statement).await.map_err(|e| {
            error!("Failed to count merchants: {}", e);
            CoreError::StorageError
        })?;

        let Some(row) = row else {
            return Ok(0);
        };

        row.try_get::<i64>("", COUNT_ALIAS).map_err(|e| {
            error!("Failed to read merchant count: {}", e);
            CoreError::StorageError
        })
    }
}

impl MerchantRepository for SqlMerchantRepository {
    async fn fetch_all(
        &self,
        predicate: Predicate,
        pagination: Option<Pagination>,
    ) -> Result<Paginated<Merchant>, CoreError> {
        let backend = self.backend();

        let items = self
            .query_merchants(select_merchants(backend, &predicate, pagination.as_ref()))
            .await?;
        let total = self
            .query_count(count_merchants(backend, &predicate))
            .await?;

        Ok(Paginated {
            items,
            total,
            pagination,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Merchant, CoreError> {
        let statement = select_merchants(self.backend(), &Predicate::by_id(id), None);

        let merchant = self
            .query_merchants(statement)
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::NotFound)?;

        let images = match self.get_images_by_merchant_id(id).await {
            Ok(images) => images,
            Err(e) => {
                warn!(merchant_id = id, "Serving merchant without images: {}", e);
                Vec::new()
            }
        };

        Ok(merchant.with_images(images))
    }

    async fn get_images_by_merchant_id(&self, merchant_id: i64) -> Result<Vec<Image>, CoreError> {
        let images = ImageEntity::find()
            .filter(ImageColumn::MbMerchantId.eq(merchant_id))
            .order_by_asc(ImageColumn::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch merchant images: {}", e);
                CoreError::StorageError
            })?
            .into_iter()
            .map(Image::from)
            .collect::<Vec<Image>>();

        Ok(images)
    }

    async fn search(&self, keyword: String) -> Result<Paginated<Merchant>, CoreError> {
        self.fetch_all(Predicate::keyword(&keyword), None).await
    }

    async fn list_areas(&self) -> Result<Vec<Area>, CoreError> {
        let areas = AreaEntity::find()
            .order_by_asc(AreaColumn::AreaId)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch areas: {}", e);
                CoreError::StorageError
            })?
            .into_iter()
            .map(Area::from)
            .collect::<Vec<Area>>();

        Ok(areas)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        let categories = CategoryEntity::find()
            .order_by_asc(CategoryColumn::MbCategoryId)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch categories: {}", e);
                CoreError::StorageError
            })?
            .into_iter()
            .map(Category::from)
            .collect::<Vec<Category>>();

        Ok(categories)
    }
}
