use log::{debug, trace, error};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::request::{CompletionResult, GenerateRequest};

/// Client for a local Ollama-style generate endpoint
///
/// One request per call, awaited to completion. No retries and no
/// timeout beyond the transport defaults.
#[derive(Debug)]
pub struct LlmClient
{   config: ClientConfig
  , http_client: reqwest::Client
}

impl LlmClient
{   /// Create a client for the given configuration.
    /// Fails with `InvalidConfiguration` when `config.validate()` does
    pub fn new(config: ClientConfig) -> Result<Self, Error>
    {   config.validate().map_err(|e| {
          error!("Rejected client config: {}", e);
          e
        })?;
        debug!(
          "Creating LlmClient for {} at {}",
          config.model, config.endpoint
        );
        Ok(LlmClient
        {   config
          , http_client: reqwest::Client::new()
        })
    }

    /// Client for the default local endpoint and model
    pub fn with_default_config() -> Self
    {   LlmClient
        {   config: ClientConfig::default()
          , http_client: reqwest::Client::new()
        }
    }

    pub fn config(&self) -> &ClientConfig
    {   &self.config
    }

    /// Send `prompt` and wait for the whole completion
    pub async fn generate_completion(
      &self
    , prompt: &str
    ) -> Result<CompletionResult, Error>
    {   debug!("Handling generate_completion for: {}", self.config.model);

        let request = GenerateRequest::new(&self.config, prompt);
        trace!("Generate request: {:?}", request);

        let response = self.http_client
          .post(&self.config.endpoint)
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("Fetch error: {}", e);
            if e.is_builder()
            {   Error::InvalidConfiguration(e.to_string())
            } else
            {   Error::Connectivity(e.to_string())
            }
          })?;

        let status = response.status();
        trace!("Generate response status: {}", status);

        if !status.is_success()
        {   error!("HTTP error! status: {}", status.as_u16());
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let raw = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          Error::Connectivity(e.to_string())
        })?;
        trace!("Generate response body: {}", raw);

        let body: serde_json::Value = serde_json::from_str(&raw)
          .map_err(|e| {
            error!("Response body is not JSON: {}", e);
            Error::MalformedResponse(raw.clone())
          })?;

        let result = CompletionResult::from_reply(prompt, &body)
          .map_err(|e| {
            error!("{}", e);
            Error::MalformedResponse(raw)
          })?;

        debug!(
          "Completion received: {} input / {} output tokens (estimated)",
          result.usage.input_tokens, result.usage.output_tokens
        );
        Ok(result)
    }
}
