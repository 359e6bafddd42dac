//! HTTP transport behind a trait seam.
//!
//! One attempt per call, no retries: the pipeline decides what a failure
//! means. Non-2xx statuses surface as [`ClientError::Remote`] with a
//! bounded body snippet; bodies that are not JSON surface as
//! [`ClientError::Decode`]. Stages depend on the [`Transporte`] trait so
//! they can be exercised against an in-memory fake.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ClientError;
use crate::profile::RequestProfile;

/// Per-call timeout; a timeout surfaces as a transport failure.
const TIMEOUT_SEGUNDOS: u64 = 30;

/// Upper bound on the response-body excerpt carried in a remote error.
const LIMITE_SNIPPET: usize = 500;

/// One JSON-returning HTTP call, carrying the shared request profile.
#[async_trait]
pub trait Transporte: Send + Sync {
    async fn get_json(&self, url: &str, perfil: &RequestProfile) -> Result<Value, ClientError>;

    async fn post_json(
        &self,
        url: &str,
        perfil: &RequestProfile,
        corpo: &Value,
    ) -> Result<Value, ClientError>;
}

/// reqwest-backed transport used outside tests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the transport with the standard per-call timeout.
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SEGUNDOS))
            .build()?;
        Ok(Self { client })
    }

    fn montar_headers(perfil: &RequestProfile) -> HeaderMap {
        let mut mapa = HeaderMap::new();
        for (nome, valor) in perfil.headers() {
            if let (Ok(n), Ok(v)) = (
                HeaderName::from_bytes(nome.as_bytes()),
                HeaderValue::from_str(valor),
            ) {
                mapa.insert(n, v);
            } else {
                debug!(header = %nome, "dropping header not representable on the wire");
            }
        }
        if let Some(cookie) = perfil.cookie()
            && let Ok(v) = HeaderValue::from_str(cookie)
        {
            mapa.insert(COOKIE, v);
        }
        mapa
    }

    async fn decodificar(resp: reqwest::Response) -> Result<Value, ClientError> {
        let status = resp.status();
        let corpo = resp.text().await?;
        if !status.is_success() {
            debug!(status = status.as_u16(), corpo = %corpo, "upstream rejected the request");
            return Err(ClientError::Remote {
                status: status.as_u16(),
                snippet: recortar(&corpo),
            });
        }
        Ok(serde_json::from_str(&corpo)?)
    }
}

#[async_trait]
impl Transporte for HttpTransport {
    async fn get_json(&self, url: &str, perfil: &RequestProfile) -> Result<Value, ClientError> {
        info!(url = %url, "GET");
        let resp = self
            .client
            .get(url)
            .headers(Self::montar_headers(perfil))
            .send()
            .await?;
        Self::decodificar(resp).await
    }

    async fn post_json(
        &self,
        url: &str,
        perfil: &RequestProfile,
        corpo: &Value,
    ) -> Result<Value, ClientError> {
        info!(url = %url, "POST");
        let resp = self
            .client
            .post(url)
            .headers(Self::montar_headers(perfil))
            .json(corpo)
            .send()
            .await?;
        Self::decodificar(resp).await
    }
}

/// First ~500 characters of a failing body; never the whole thing.
fn recortar(corpo: &str) -> String {
    if corpo.chars().count() <= LIMITE_SNIPPET {
        return corpo.to_string();
    }
    corpo.chars().take(LIMITE_SNIPPET).collect()
}
