//! Equipment inventory front-end
//!
//! Lists, registers, edits and removes equipamentos held by a REST backend.
//! The components are headless: each owns its state and renders to text.
//!
//! - [`shell::Shell`] owns the canonical collection and reloads it after every mutation
//! - [`listing::Listing`] shows the collection and runs the edit flow
//! - [`form::EquipmentForm`] registers new records
//! - [`edit::EditOverlay`] edits one record
//! - [`format`] normalizes currency and date input

pub mod config;
pub mod draft;
pub mod edit;
pub mod error;
pub mod form;
pub mod format;
pub mod header;
pub mod listing;
pub mod notify;
pub mod shell;

use std::sync::Arc;

use equipamentos_transport::{EquipamentoApi, EquipamentoClient, TransportError};
use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::{Error, Result};
use crate::notify::Toaster;
use crate::shell::Shell;

pub use equipamentos_transport as transport;

/// The main entry point: a configured backend client plus the shared toast queue
#[derive(Debug, Clone)]
pub struct Equipamentos {
    /// HTTP client for the equipment collection
    pub client: EquipamentoClient,
    /// Toasts raised by every component built from this instance
    pub toaster: Toaster,
    /// Client options
    pub options: ClientOptions,
}

impl Equipamentos {
    /// Create a client for the collection at `api_url`
    ///
    /// # Example
    ///
    /// ```
    /// use equipamentos::Equipamentos;
    ///
    /// let equipamentos = Equipamentos::new("http://localhost:8000/api/equipamentos/").unwrap();
    /// assert_eq!(equipamentos.client.csrf_token(), None);
    /// ```
    pub fn new(api_url: &str) -> Result<Self> {
        Self::new_with_options(ClientOptions::default().with_api_url(api_url))
    }

    /// Create a client with custom options
    pub fn new_with_options(options: ClientOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(TransportError::from)?;

        let client = EquipamentoClient::new(&options.api_url, http_client)
            .map_err(|e| Error::config(format!("invalid api_url {:?}: {}", options.api_url, e)))?
            .with_csrf_token(options.csrf_token.clone());

        Ok(Self {
            client,
            toaster: Toaster::new(),
            options,
        })
    }

    /// The transport as the components consume it
    pub fn api(&self) -> Arc<dyn EquipamentoApi> {
        Arc::new(self.client.clone())
    }

    /// A fresh, unmounted application shell
    pub fn shell(&self) -> Shell {
        Shell::new(self.api(), self.toaster.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::{Error, Result};
    pub use crate::shell::{Shell, View};
    pub use crate::Equipamentos;
    pub use equipamentos_transport::{Equipamento, EquipamentoApi, NovoEquipamento, Status};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_invalid_api_url_is_config_error() {
        let result = Equipamentos::new("not a url");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_options_reach_the_client() {
        let options = ClientOptions::default()
            .with_api_url("http://example.com/api/equipamentos")
            .with_csrf_token(Some("abc".to_string()))
            .with_request_timeout(Some(Duration::from_secs(5)));

        let equipamentos = Equipamentos::new_with_options(options).unwrap();
        assert_eq!(
            equipamentos.client.base_url().as_str(),
            "http://example.com/api/equipamentos/"
        );
        assert_eq!(equipamentos.client.csrf_token(), Some("abc"));
    }
}
