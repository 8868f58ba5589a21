use sea_orm::entity::prelude::*;

/// The soft-delete column `is_deleted` is filtered on but never read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mb_merchant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub mb_merchant_id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub latitude: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub mb_category_id: Option<i64>,
    pub area_id: Option<i64>,
    pub image: Option<String>,
    pub delivery: Option<i64>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub facebook: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mb_merchant_image::Entity")]
    MbMerchantImage,
}

impl Related<super::mb_merchant_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbMerchantImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
