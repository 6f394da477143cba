pub mod error;
pub mod config;
pub mod request;
pub mod usage;
pub mod client;
pub mod report;

/*

llmcall: send one prompt to a local Ollama server, print the
completion and an estimate of how many tokens it took.

llmcall/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and defaults
│   ├── error.rs        # Error taxonomy
│   ├── config.rs       # Endpoint / model configuration
│   ├── request.rs      # Wire payload and completion result
│   ├── usage.rs        # Word counting and token estimates
│   ├── client.rs       # The HTTP round trip
│   ├── report.rs       # Console text
│   └── main.rs         # Demo binary
└── tests/

*/

/// Generate endpoint of a local Ollama server
pub const DEFAULT_ENDPOINT: &str
  = "http://localhost:11434/api/generate";

/// Model requested when none is configured
pub const DEFAULT_MODEL: &str = "llama3.2:latest";

pub use client::LlmClient;
pub use config::ClientConfig;
pub use error::Error;
pub use request::{CompletionResult, GenerateRequest};
pub use usage::{estimate_tokens, word_count, TokenUsage};
