//! reqwest-backed implementation of [`ItineraryGateway`]

use super::error::HttpGatewayError;
use async_trait::async_trait;
use reqwest::{Client, Url, header};
use tracing::{debug, warn};
use tripchat_application::{GatewayError, ItineraryGateway};
use tripchat_domain::{GenerateReply, GenerateRequest, preview};

/// Posts `{"message": ...}` as JSON to a fixed endpoint and parses the JSON
/// reply.
///
/// The status code does not decide success: the server answers 401/400 with
/// a regular `{"response": ...}` body, and that text is what the user should
/// see. Only a body that is not JSON counts as a failure.
#[derive(Debug, Clone)]
pub struct HttpItineraryGateway {
    client: Client,
    endpoint: Url,
    cookie: Option<String>,
}

impl HttpItineraryGateway {
    pub fn new(endpoint: Url) -> Result<Self, HttpGatewayError> {
        let client = Client::builder()
            .user_agent(concat!("tripchat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            cookie: None,
        })
    }

    /// Send this `Cookie` header with every request
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post(&self, request: &GenerateRequest) -> Result<GenerateReply, HttpGatewayError> {
        let mut builder = self.client.post(self.endpoint.clone()).json(request);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(%status, endpoint = %self.endpoint, "Itinerary endpoint replied");
        } else {
            warn!(%status, endpoint = %self.endpoint, "Itinerary endpoint returned an error status");
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<GenerateReply>(&body).map_err(|e| HttpGatewayError::Decode {
            status: status.as_u16(),
            error: e.to_string(),
            body: preview(&String::from_utf8_lossy(&body), 200),
        })
    }
}

#[async_trait]
impl ItineraryGateway for HttpItineraryGateway {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateReply, GatewayError> {
        self.post(request).await.map_err(GatewayError::from)
    }
}
