use crate::errors::DispatchError;
use crate::models::{ErrorBody, ProcessQueryRequest, ReadMessagesResponse};
use reqwest::header::ACCEPT;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: reqwest::Client,
    base_url: String,
}

impl Dispatcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn read_messages(&self, count: i64) -> Result<ReadMessagesResponse, DispatchError> {
        let url = format!("{}/read_messages/{count}", self.base_url);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await.map_err(network)?;
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(network);
        }

        let body: ErrorBody = response.json().await.map_err(network)?;
        Err(DispatchError::Http {
            status,
            detail: body.detail.into_text(),
        })
    }

    pub async fn process_query(&self, query: &str) -> Result<(), DispatchError> {
        let url = format!("{}/process_query", self.base_url);
        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&ProcessQueryRequest { query })
            .send()
            .await
            .map_err(network)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body: ErrorBody = response.json().await.map_err(network)?;
        Err(DispatchError::Http {
            status,
            detail: body.detail.into_text(),
        })
    }
}

fn network(err: reqwest::Error) -> DispatchError {
    DispatchError::Network(err.to_string())
}
