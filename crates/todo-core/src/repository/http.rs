//! HTTP Todo Repository
//!
//! `TodoRepository` backed by the REST collection at `/api/{backend}/todo`.
//! Uses reqwest, which runs on `fetch` in the browser and on hyper natively.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::traits::TodoRepository;
use crate::config::ApiConfig;
use crate::domain::{Item, ItemId, TodoError, TodoResult, TodoText};

/// Optional error payload on failure responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpTodoRepository {
    client: Client,
    config: ApiConfig,
}

impl HttpTodoRepository {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a request and turn non-success statuses into `TodoError`.
    ///
    /// A 404 becomes `NotFound` only when the request targeted a single item.
    async fn send(&self, request: RequestBuilder, target: Option<ItemId>) -> TodoResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| TodoError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = target {
                return Err(TodoError::NotFound(id));
            }
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        log::warn!(
            "[HTTP] {} answered {}: {:?}",
            self.config.backend(),
            status.as_u16(),
            message
        );
        Err(TodoError::Remote {
            status: Some(status.as_u16()),
            message,
        })
    }

    async fn read_body(response: Response) -> TodoResult<String> {
        response
            .text()
            .await
            .map_err(|e| TodoError::Transport(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(body: &str) -> TodoResult<T> {
        serde_json::from_str(body).map_err(|e| TodoError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TodoRepository for HttpTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Item>> {
        let url = self.config.collection_url();
        log::debug!("[HTTP] GET {}", url);
        let response = self.send(self.client.get(&url), None).await?;
        let body = Self::read_body(response).await?;
        Self::decode(&body)
    }

    async fn create(&self, text: &str) -> TodoResult<Item> {
        let url = self.config.collection_url();
        log::debug!("[HTTP] POST {}", url);
        let request = self.client.post(&url).json(&TodoText::new(text));
        let response = self.send(request, None).await?;
        let body = Self::read_body(response).await?;
        Self::decode(&body)
    }

    async fn update(&self, id: ItemId, text: &str) -> TodoResult<Option<Item>> {
        let url = self.config.item_url(id);
        log::debug!("[HTTP] PUT {}", url);
        let request = self.client.put(&url).json(&TodoText::new(text));
        let response = self.send(request, Some(id)).await?;
        let body = Self::read_body(response).await?;
        match body.trim() {
            "" | "null" => Ok(None),
            body => Self::decode(body).map(Some),
        }
    }

    async fn delete(&self, id: ItemId) -> TodoResult<()> {
        let url = self.config.item_url(id);
        log::debug!("[HTTP] DELETE {}", url);
        self.send(self.client.delete(&url), Some(id)).await?;
        Ok(())
    }
}
