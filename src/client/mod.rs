//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Password, RawPhoneNumber, SendSms, Username, ValidationError};

const DEFAULT_ENDPOINT: &str = "https://go.qtelecom.ru/public/http/";
// The gateway contract pins both header values verbatim.
const DEFAULT_USER_AGENT: &str = "qtelecom.ru python API client";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .form(&params)
                // Set after `form(..)` so the charset-qualified value wins.
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials for the Quick Telecom gateway.
///
/// Both parts are validated non-empty at construction and are never exposed
/// again; they only leave the client inside the form body of a request.
pub struct Auth {
    user: Username,
    password: Password,
}

impl Auth {
    /// Create credentials and validate that both parts are non-empty.
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            user: Username::new(user)?,
            password: Password::new(password)?,
        })
    }

    fn user(&self) -> &Username {
        &self.user
    }

    fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`QtClient`].
///
/// This error preserves:
/// - HTTP-level transport failures (DNS, TLS, timeouts),
/// - gateway failures (non-200 HTTP status, with the raw XML body),
/// - validation failures from the domain constructors.
pub enum QtError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with a non-200 HTTP status.
    ///
    /// The raw response body is an XML document from the provider; it is
    /// carried verbatim for diagnostics, never parsed.
    #[error("request failed with status code {status}\nXML response: {body}")]
    Remote { status: u16, body: String },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`QtClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
/// The defaults reproduce the gateway's wire contract exactly.
pub struct QtClientBuilder {
    auth: Auth,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl QtClientBuilder {
    /// Create a builder with the default endpoint, user-agent, and no timeout.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the gateway endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a [`QtClient`].
    ///
    /// Fails with [`QtError::Validation`] when the endpoint override is not a
    /// valid URL.
    pub fn build(self) -> Result<QtClient, QtError> {
        if url::Url::parse(&self.endpoint).is_err() {
            return Err(QtError::Validation(ValidationError::InvalidEndpoint {
                input: self.endpoint,
            }));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| QtError::Transport(Box::new(err)))?;

        Ok(QtClient {
            auth: self.auth,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport {
                client,
                user_agent: self.user_agent,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level Quick Telecom client.
///
/// This type orchestrates request validation, form encoding, and the HTTP
/// round trip. By default it posts to `https://go.qtelecom.ru/public/http/`.
///
/// The client holds no mutable state after construction; cloning is cheap
/// and concurrent calls are independent.
pub struct QtClient {
    auth: Auth,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for QtClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QtClient")
            .field("auth", &self.auth)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl QtClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`QtClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                user_agent: DEFAULT_USER_AGENT.to_owned(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> QtClientBuilder {
        QtClientBuilder::new(auth)
    }

    /// Send an SMS message through the Quick Telecom gateway.
    ///
    /// The request is submitted as one atomic POST; per-recipient outcomes
    /// are not observable. On success the message, target list, and raw
    /// gateway response are logged at `info` level.
    ///
    /// Errors:
    /// - [`QtError::Remote`] when the gateway answers with a non-200 status,
    /// - [`QtError::Transport`] when the HTTP call itself fails.
    pub async fn post_sms(&self, request: SendSms) -> Result<(), QtError> {
        let params = crate::transport::encode_post_sms_form(
            self.auth.user(),
            self.auth.password(),
            &request,
        );

        let response = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(QtError::Transport)?;

        if response.status != 200 {
            return Err(QtError::Remote {
                status: response.status,
                body: response.body,
            });
        }

        let targets = request
            .targets()
            .iter()
            .map(RawPhoneNumber::raw)
            .collect::<Vec<_>>()
            .join(",");
        tracing::info!(
            text = request.message().as_str(),
            targets = targets.as_str(),
            response = response.body.as_str(),
            "sms submitted to gateway"
        );

        Ok(())
    }
}
