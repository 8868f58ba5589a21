pub mod merchant_repository;

pub use merchant_repository::SqlMerchantRepository;

#[cfg(test)]
mod sqlite_tests;
