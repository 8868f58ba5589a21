use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mb_merchant_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub mb_category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub code: Option<String>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
