use std::fmt;

/// Error type for a completion call
/// Every failure surfaces to the caller as one of these; nothing is
/// retried or recovered inside the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Could not reach the inference server
    Connectivity(String)
  , /// Server answered with a non-success status code
    HttpStatus(u16)
  , /// Body decoded but had no usable `response` field.
    /// Carries the raw body for diagnosis
    MalformedResponse(String)
  , /// Configuration rejected before any request was sent
    InvalidConfiguration(String)
}

impl Error
{   /// Status code carried by an `HttpStatus` error
    pub fn status(&self) -> Option<u16>
    {   match self
        {   Error::HttpStatus(code) => Some(*code)
          , _ => None
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::Connectivity(msg) => {
              write!(f,
                "Could not connect to inference server: {}",
                msg
              )
            }
          , Error::HttpStatus(code) => {
              write!(f, "HTTP error! status: {}", code)
            }
          , Error::MalformedResponse(body) => {
              write!(f,
                "No response field in API result. Full data: {}",
                single_line(body)
              )
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Join the lines of `text` with single spaces so a multi-line body
/// still prints as one line
fn single_line(text: &str) -> String
{   text.lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .collect::<Vec<_>>()
      .join(" ")
}
