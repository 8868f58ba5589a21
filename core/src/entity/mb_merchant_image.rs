use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mb_merchant_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub mb_merchant_id: i64,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mb_merchant::Entity",
        from = "Column::MbMerchantId",
        to = "super::mb_merchant::Column::MbMerchantId"
    )]
    MbMerchant,
}

impl Related<super::mb_merchant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbMerchant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
