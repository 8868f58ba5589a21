use crate::{
    domain::common::{MerchantConfig, services::Service},
    infrastructure::{db::store::SqlStore, merchant::SqlMerchantRepository},
};

pub type MerchantDirectoryService = Service<SqlMerchantRepository>;

pub async fn create_service(config: MerchantConfig) -> Result<MerchantDirectoryService, anyhow::Error> {
    let store = SqlStore::connect(&config.database).await?;
    let merchant_repository = SqlMerchantRepository::new(store.get_db());

    Ok(Service::new(merchant_repository, config.request_timeout))
}
