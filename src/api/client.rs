//! HTTP transport for the loan API

use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
    models::ApiEnvelope,
};

/// JSON-over-HTTP client bound to one API base URL
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<ApiEnvelope<T>> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", url, query);
        let response = self.http.get(&url).query(query).send().await?;
        decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: Option<&B>) -> AppResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        decode(request.send().await?).await
    }
}

/// Read an envelope from a response.
///
/// Non-2xx answers are transport failures unless their body is a rejection
/// envelope carrying a message, in which case the message wins.
async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<ApiEnvelope<T>> {
    let status = response.status();
    let body = response.bytes().await?;

    match serde_json::from_slice::<ApiEnvelope<T>>(&body) {
        Ok(envelope) if status.is_success() => Ok(envelope),
        Ok(envelope) if !envelope.success && envelope.message.is_some() => {
            tracing::warn!("Request rejected with HTTP {}", status);
            Ok(envelope)
        }
        Ok(_) => Err(AppError::HttpStatus {
            status: status.as_u16(),
        }),
        Err(e) if status.is_success() => Err(AppError::MalformedResponse(e.to_string())),
        Err(_) => Err(AppError::HttpStatus {
            status: status.as_u16(),
        }),
    }
}
