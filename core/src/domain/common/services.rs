use std::time::Duration;

use crate::domain::merchant::ports::MerchantRepository;

/// Entry point of the core: owns the repository and the per-call deadline.
#[derive(Clone, Debug)]
pub struct Service<M>
where
    M: MerchantRepository,
{
    pub(crate) merchant_repository: M,
    pub(crate) timeout: Duration,
}

impl<M> Service<M>
where
    M: MerchantRepository,
{
    pub fn new(merchant_repository: M, timeout: Duration) -> Self {
        Self {
            merchant_repository,
            timeout,
        }
    }
}
