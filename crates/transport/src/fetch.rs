//! HTTP request helper shared by the equipment operations

use crate::TransportError;
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

/// Helper for building and executing a single JSON request
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: Url,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: Url, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Self {
            client,
            url,
            method,
            headers,
            body: None,
        }
    }

    /// Add a header to the request. Names or values that are not valid HTTP are skipped.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => debug!("Skipping invalid header {}", name),
        }
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, TransportError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    fn build(&self) -> RequestBuilder {
        let mut req = self
            .client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers.clone());

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        req
    }

    async fn send(&self) -> Result<Response, TransportError> {
        debug!("{} {}", self.method, self.url);
        let response = self.build().send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(TransportError::Api(format!(
                "Request failed with status {}: {}",
                status, text
            )));
        }

        Ok(response)
    }

    /// Execute the request and parse the response as JSON
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        let response = self.send().await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute the request, ignoring any response body
    pub async fn execute_empty(&self) -> Result<(), TransportError> {
        self.send().await?;
        Ok(())
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get(client: &Client, url: Url) -> FetchBuilder<'_> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post(client: &Client, url: Url) -> FetchBuilder<'_> {
        FetchBuilder::new(client, url, Method::POST)
    }

    /// Create a PUT request
    pub fn put(client: &Client, url: Url) -> FetchBuilder<'_> {
        FetchBuilder::new(client, url, Method::PUT)
    }

    /// Create a DELETE request
    pub fn delete(client: &Client, url: Url) -> FetchBuilder<'_> {
        FetchBuilder::new(client, url, Method::DELETE)
    }
}
