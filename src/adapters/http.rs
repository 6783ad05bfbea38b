use crate::domain::model::ClientOrders;
use crate::domain::ports::{ClientOrdersSource, ConfigProvider};
use crate::utils::error::{Result, ShopError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Talks to the shop service over HTTP. Only the "client orders" call is
/// implemented; nothing here retries or authenticates.
#[derive(Debug, Clone)]
pub struct HttpShopClient {
    client: Client,
    base_url: String,
}

impl HttpShopClient {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn client_orders_url(&self, client_id: i64) -> String {
        format!("{}/{}/orders", self.base_url, client_id)
    }
}

#[async_trait]
impl ClientOrdersSource for HttpShopClient {
    async fn client_orders(&self, client_id: i64) -> Result<ClientOrders> {
        let url = self.client_orders_url(client_id);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("📡 {} -> {}", url, status);

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ShopError::ClientNotFound { client_id });
        }

        Err(ShopError::UnexpectedStatus {
            status: status.as_u16(),
            url,
        })
    }
}
