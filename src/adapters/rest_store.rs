use crate::core::{ConfigProvider, NewPlayer, Player, PlayerId, PlayerStore};
use crate::utils::error::{RosterError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

/// PostgREST 風格的遠端玩家集合：`{endpoint}/{table}`
pub struct RestPlayerStore {
    client: Client,
    collection_url: String,
    api_key: Option<String>,
}

impl RestPlayerStore {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            collection_url: format!(
                "{}/{}",
                config.store_endpoint().trim_end_matches('/'),
                config.table()
            ),
            api_key: config.api_key().map(str::to_string),
        })
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("Store response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(RosterError::StoreError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PlayerStore for RestPlayerStore {
    async fn list_players(&self) -> Result<Vec<Player>> {
        tracing::debug!("GET {}", self.collection_url);
        let request = self
            .client
            .get(&self.collection_url)
            .query(&[("select", "*"), ("order", "created_at.asc")]);

        let response = Self::check(self.authorize(request).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn insert_player(&self, player: &NewPlayer) -> Result<()> {
        tracing::debug!("POST {}", self.collection_url);
        let request = self
            .client
            .post(&self.collection_url)
            .header("prefer", "return=minimal")
            .json(player);

        Self::check(self.authorize(request).send().await?).await?;
        Ok(())
    }

    async fn delete_player(&self, id: &PlayerId) -> Result<()> {
        tracing::debug!("DELETE {} (id = {})", self.collection_url, id);
        let filter = format!("eq.{}", id);
        let request = self
            .client
            .delete(&self.collection_url)
            .query(&[("id", filter.as_str())]);

        Self::check(self.authorize(request).send().await?).await?;
        Ok(())
    }
}
