use crate::application::http::merchant::router::MerchantApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Merchant Service API"
    ),
    nest(
        (path = "/merchant", api = MerchantApiDoc),
    )
)]
pub struct ApiDoc;
