//! Console text for the demo binary

/// Tells the user how to bring the local server up
pub const REMEDIATION_HINT: &str
  = "Make sure Ollama is running! Start it with: ollama serve";

/// Shown instead when the configuration itself was rejected
pub const CONFIG_HINT: &str
  = "Check LLMCALL_ENDPOINT (an http(s) URL) and LLMCALL_MODEL.";

/// Line printed before the call is made
pub fn render_banner(model: &str) -> String
{   format!("🤖 Making a test call to local LLM ({})...\n", model)
}

/// Response text followed by the usage breakdown
pub fn render_completion(result: &crate::request::CompletionResult)
  -> String
{   let usage = &result.usage;
    let mut out = format!("📝 Response: {}\n", result.response);
    out.push_str("\n📊 Token Usage (estimated):\n");
    out.push_str(
      &format!("   Input tokens:  {}\n", usage.input_tokens)
    );
    out.push_str(
      &format!("   Output tokens: {}\n", usage.output_tokens)
    );
    out.push_str(
      &format!("   Total tokens:  {}", usage.total_tokens())
    );
    out
}

/// Hint matching the kind of failure
pub fn hint_for(err: &crate::error::Error) -> &'static str
{   match err
    {   crate::error::Error::InvalidConfiguration(_) => CONFIG_HINT
      , _ => REMEDIATION_HINT
    }
}

/// Error line plus a one-line hint
pub fn render_failure(err: &crate::error::Error) -> String
{   format!("❌ Error: {}\n\n{}", err, hint_for(err))
}
