//! REST transport for the equipment inventory
//!
//! This crate wraps the four operations the backend exposes on its
//! `equipamentos` collection:
//!
//! - `GET    {base}`       list every record
//! - `POST   {base}`       create a record
//! - `PUT    {base}{id}/`  replace a record
//! - `DELETE {base}{id}/`  remove a record
//!
//! Any status outside the 2xx range is reported as [`TransportError::Api`]
//! carrying a readable message. Nothing is retried.

pub mod fetch;
pub mod types;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::fetch::Fetch;

pub use crate::types::{Equipamento, NovoEquipamento, Status, UnknownStatus};

/// Default collection URL of the backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/equipamentos/";

/// Header carrying the CSRF token on updates
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Transport errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;

/// The four operations on the equipment collection
#[async_trait]
pub trait EquipamentoApi: Send + Sync {
    /// Every record, in the order the server returns them
    async fn list(&self) -> Result<Vec<Equipamento>>;

    /// Create a record and return it with its server-assigned id
    async fn create(&self, equipamento: &NovoEquipamento) -> Result<Equipamento>;

    /// Replace every mutable field of record `id`
    async fn update(&self, id: i64, equipamento: &NovoEquipamento) -> Result<Equipamento>;

    /// Remove record `id`
    async fn delete(&self, id: i64) -> Result<()>;
}

/// HTTP implementation of [`EquipamentoApi`]
#[derive(Debug, Clone)]
pub struct EquipamentoClient {
    base_url: Url,
    csrf_token: Option<String>,
    http_client: Client,
}

impl EquipamentoClient {
    /// Create a client for the collection at `base_url`
    ///
    /// # Example
    ///
    /// ```
    /// use equipamentos_transport::EquipamentoClient;
    ///
    /// let client = EquipamentoClient::new(
    ///     "http://localhost:8000/api/equipamentos",
    ///     reqwest::Client::new(),
    /// )
    /// .unwrap();
    /// assert_eq!(client.base_url().as_str(), "http://localhost:8000/api/equipamentos/");
    /// ```
    pub fn new(base_url: &str, http_client: Client) -> Result<Self> {
        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');

        Ok(Self {
            base_url: Url::parse(&normalized)?,
            csrf_token: None,
            http_client,
        })
    }

    /// Attach a CSRF token to updates. An empty token is the same as none.
    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf_token = token.filter(|t| !t.is_empty());
        self
    }

    /// The normalized collection URL, always ending with `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The CSRF token sent on updates, if any
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    fn item_url(&self, id: i64) -> Result<Url> {
        Ok(self.base_url.join(&format!("{}/", id))?)
    }
}

#[async_trait]
impl EquipamentoApi for EquipamentoClient {
    async fn list(&self) -> Result<Vec<Equipamento>> {
        let records: Vec<Equipamento> = Fetch::get(&self.http_client, self.base_url.clone())
            .execute()
            .await?;
        debug!("Fetched {} equipamentos", records.len());
        Ok(records)
    }

    async fn create(&self, equipamento: &NovoEquipamento) -> Result<Equipamento> {
        let created: Equipamento = Fetch::post(&self.http_client, self.base_url.clone())
            .json(equipamento)?
            .execute()
            .await?;
        info!("Created equipamento {}", created.id);
        Ok(created)
    }

    async fn update(&self, id: i64, equipamento: &NovoEquipamento) -> Result<Equipamento> {
        let mut request = Fetch::put(&self.http_client, self.item_url(id)?).json(equipamento)?;
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let updated: Equipamento = request.execute().await?;
        info!("Updated equipamento {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        Fetch::delete(&self.http_client, self.item_url(id)?)
            .execute_empty()
            .await?;
        info!("Deleted equipamento {}", id);
        Ok(())
    }
}
