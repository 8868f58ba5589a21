use std::sync::Arc;

use merchant_core::application::MerchantDirectoryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MerchantDirectoryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MerchantDirectoryService) -> Self {
        Self { args, service }
    }
}
