//! Wire payload and result types

use serde::Serialize;

/// Body of a POST to the generate endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest
{   /// Model identifier
    pub model: String
  , /// The prompt text
    pub prompt: String
  , /// Always false; the reply arrives as one JSON object
    pub stream: bool
}

impl GenerateRequest
{   pub fn new(config: &crate::config::ClientConfig, prompt: &str)
      -> Self
    {   GenerateRequest
        {   model: config.model.clone()
          , prompt: prompt.to_string()
          , stream: false
        }
    }
}

/// Generated text plus estimated usage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult
{   /// Generated text
    pub response: String
  , /// Estimated token usage
    pub usage: crate::usage::TokenUsage
}

impl CompletionResult
{   /// Build a result from a decoded reply body.
    ///
    /// Fails unless the body carries a non-empty string `response`.
    /// The error holds the body re-encoded as JSON.
    pub fn from_reply(
      prompt: &str
    , body: &serde_json::Value
    ) -> Result<Self, crate::error::Error>
    {   let response = body.get("response")
          .and_then(serde_json::Value::as_str)
          .filter(|text| !text.is_empty())
          .ok_or_else(|| {
            crate::error::Error::MalformedResponse(body.to_string())
          })?;

        Ok(CompletionResult
        {   response: response.to_string()
          , usage: crate::usage::TokenUsage::estimate(prompt, response)
        })
    }
}
