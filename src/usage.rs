//! Approximate token accounting
//!
//! There is no tokenizer here. A token estimate is the number of
//! space-delimited words scaled by [`TOKENS_PER_WORD`] and rounded up.

use serde::Serialize;

/// Scale factor from words to estimated tokens
pub const TOKENS_PER_WORD: f64 = 1.3;

/// Count words by splitting on the literal space character.
///
/// Consecutive spaces yield empty segments and each one counts. Tabs
/// and newlines do not split. The empty string has zero words.
pub fn word_count(text: &str) -> usize
{   if text.is_empty()
    {   return 0;
    }
    text.split(' ').count()
}

/// `ceil(word_count(text) * 1.3)`
pub fn estimate_tokens(text: &str) -> u64
{   (word_count(text) as f64 * TOKENS_PER_WORD).ceil() as u64
}

/// Estimated token usage of one completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenUsage
{   pub input_tokens: u64
  , pub output_tokens: u64
}

impl TokenUsage
{   /// Estimate usage from the prompt and the generated text
    pub fn estimate(prompt: &str, response: &str) -> Self
    {   TokenUsage
        {   input_tokens: estimate_tokens(prompt)
          , output_tokens: estimate_tokens(response)
        }
    }

    pub fn total_tokens(&self) -> u64
    {   self.input_tokens + self.output_tokens
    }
}
