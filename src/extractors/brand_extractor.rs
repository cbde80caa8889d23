use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::categories::Category;
use crate::clients::HttpClient;
use crate::config::Settings;
use crate::error::Result;
use crate::models::BrandListResponse;

const SHOP_LIST_URL: &str = "https://shopee.com.br/api/v4/official_shop/get_shops_by_category";

// Browser-impersonating header set. The endpoint returns incomplete data
// without the XHR and referer markers.
const HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
         (KHTML, como Gecko) Chrome/131.0.0.0 Safari/537.36",
    ),
    ("Accept", "*/*"),
    ("x-api-source", "pc"),
    ("x-requested-with", "XMLHttpRequest"),
    ("referer", "https://shopee.com.br/oficial/brands"),
];

#[async_trait]
pub trait Extractor {
    async fn extract(&self, category: &Category) -> Result<BrandListResponse>;
}

pub struct BrandExtractor {
    client: HttpClient,
    endpoint: String,
}

impl BrandExtractor {
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_endpoint(settings, SHOP_LIST_URL)
    }

    /// Same extractor pointed at an arbitrary endpoint, for tests against
    /// a local server.
    pub fn with_endpoint(settings: &Settings, endpoint: impl Into<String>) -> Result<Self> {
        let client = HttpClient::new(Duration::from_secs(settings.request_timeout_secs))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Extractor for BrandExtractor {
    async fn extract(&self, category: &Category) -> Result<BrandListResponse> {
        // need_zhuyin is mandatory even though nothing here uses it.
        let params = [
            ("need_zhuyin", "0".to_string()),
            ("category_id", category.id.to_string()),
        ];

        debug!(
            category_id = category.id,
            category_name = category.name,
            "Fetching brand listing"
        );

        let body = self.client.get(&self.endpoint, HEADERS, &params).await?;
        let response = serde_json::from_value(body)?;

        Ok(response)
    }
}
