//! Blocking REST client shared by the bundled samples.
//!
//! Every sample boils down to one [`SampleRequest`]: a method, a path under
//! the configured endpoint, query pairs and an optional body. The client adds
//! the `Ocp-Apim-Subscription-Key` header, sends it and hands back the JSON
//! reply. Non-2xx statuses become errors carrying the response body.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::{Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::{self, Config};

/// Header carrying the subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

/// One REST call, relative to the configured endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl SampleRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::GET,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post_json(path: &str, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(Body::Json(body)),
        }
    }

    pub fn post_text(path: &str, body: &str) -> Self {
        Self {
            method: Method::POST,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(Body::Text(body.to_string())),
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

/// HTTP client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct SampleClient {
    http: Client,
    base_url: String,
}

impl SampleClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    /// Client for the process-wide configuration.
    pub fn from_current() -> Result<Self> {
        Self::new(config::current())
    }

    /// Absolute URL for `request`, query string included.
    pub fn url(&self, request: &SampleRequest) -> Result<Url> {
        let raw = format!(
            "{}/{}",
            self.base_url,
            request.path.trim_start_matches('/')
        );
        let mut url =
            Url::parse(&raw).with_context(|| format!("Invalid request URL '{}'", raw))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    /// Send `request` authenticated with `key` and parse the JSON reply.
    pub fn send(&self, key: &str, request: &SampleRequest) -> Result<Value> {
        let url = self.url(request)?;
        debug!(method = %request.method, url = %url, "Sending sample request");

        let mut builder = self
            .http
            .request(request.method.clone(), url.clone())
            .header(SUBSCRIPTION_KEY_HEADER, key);
        builder = match &request.body {
            Some(Body::Json(value)) => builder.json(value),
            Some(Body::Text(text)) => builder
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(text.clone()),
            None => builder,
        };

        let response = builder
            .send()
            .with_context(|| format!("Request to {} failed", url))?;
        let status = response.status();
        let text = response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))?;

        if !status.is_success() {
            anyhow::bail!("{} returned HTTP {}: {}", request.path, status, text.trim());
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).with_context(|| format!("Response from {} is not JSON", url))
    }
}

/// Send `request` with the process-wide configuration and print the reply.
pub fn run(title: &str, key: &str, request: SampleRequest) -> Result<()> {
    let client = SampleClient::from_current()?;
    let reply = client.send(key, &request)?;
    println!("{}", title);
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
