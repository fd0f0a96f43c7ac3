use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{decode_records, Record, SubmitRequest, SubmitResponse};
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

/// HTTP client for the surveillance API. Cloning shares the connection pool.
#[derive(Clone)]
pub struct SurveillanceClient {
    http: Client,
    submit_url: String,
    data_url: String,
}

impl SurveillanceClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            submit_url: format!("{}{}", config.upstream_url, config.submit_path),
            data_url: format!("{}{}", config.upstream_url, config.data_path),
        }
    }

    pub async fn submit(&self, payload: &SubmitRequest) -> Result<SubmitResponse, ClientError> {
        let response = self
            .http
            .post(&self.submit_url)
            .json(payload)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        response.json().await.map_err(ClientError::from_reqwest)
    }

    /// Reads the stored records. An error status does not fail the load on
    /// its own: the body is decoded either way, and the API answers `[]`
    /// alongside a 500 when its store is unavailable.
    pub async fn fetch_records(&self) -> Result<Vec<Record>, ClientError> {
        let response = self
            .http
            .get(&self.data_url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "data endpoint answered with an error status");
        }

        let rows: Vec<Value> = response.json().await.map_err(ClientError::from_reqwest)?;
        Ok(decode_records(rows))
    }
}
