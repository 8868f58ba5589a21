pub mod mappers;
pub mod repositories;
pub mod sql;

pub use repositories::SqlMerchantRepository;
