//! Configuration for the inference client

use serde::{Deserialize, Serialize};
use log::debug;

/// Environment variable overriding the endpoint URL
pub const ENDPOINT_ENV: &str = "LLMCALL_ENDPOINT";

/// Environment variable overriding the model identifier
pub const MODEL_ENV: &str = "LLMCALL_MODEL";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig
{   /// Full URL of the generate endpoint
    pub endpoint: String
  , /// Model identifier sent with every request
    pub model: String
  , /// Ask the server to stream tokens. Only `false` is accepted
    pub stream: bool
}

impl Default for ClientConfig
{   fn default() -> Self
    {   ClientConfig
        {   endpoint: crate::DEFAULT_ENDPOINT.to_string()
          , model: crate::DEFAULT_MODEL.to_string()
          , stream: false
        }
    }
}

impl ClientConfig
{   /// Defaults, overridden by `LLMCALL_ENDPOINT` / `LLMCALL_MODEL`
    pub fn from_env() -> Self
    {   Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for the
    /// endpoint and model keys. Blank values are ignored
    pub fn from_lookup<F>(lookup: F) -> Self
    where
      F: Fn(&str) -> Option<String>
    {   let mut config = ClientConfig::default();
        let value = |key: &str| {
          lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        };

        if let Some(endpoint) = value(ENDPOINT_ENV)
        {   debug!("Endpoint overridden: {}", endpoint);
            config.endpoint = endpoint;
        }
        if let Some(model) = value(MODEL_ENV)
        {   debug!("Model overridden: {}", model);
            config.model = model;
        }
        config
    }

    /// Builder-style endpoint override
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self
    {   self.endpoint = endpoint.into();
        self
    }

    /// Builder-style model override
    pub fn with_model(mut self, model: impl Into<String>) -> Self
    {   self.model = model.into();
        self
    }

    /// Reject configurations the client cannot honor
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   let url = reqwest::Url::parse(&self.endpoint)
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!("endpoint {:?}: {}", self.endpoint, e)
            )
          })?;

        if url.scheme() != "http" && url.scheme() != "https"
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!("unsupported endpoint scheme: {}", url.scheme())
            ));
        }

        if self.model.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "model identifier is empty".to_string()
            ));
        }

        if self.stream
        {   return Err(crate::error::Error::InvalidConfiguration(
              "streaming responses are not supported".to_string()
            ));
        }

        Ok(())
    }
}
