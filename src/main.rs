use std::process::ExitCode;
use log::debug;
use llmcall::{ClientConfig, LlmClient, report};

const DEMO_PROMPT: &str
  = "Tell me a fun fact about space in one sentence.";

#[tokio::main]
async fn main() -> ExitCode
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("warn")
    ).init();

    let config = ClientConfig::from_env();
    debug!("Loaded config: {:?}", config);

    let client = match LlmClient::new(config)
    {   Ok(client) => client
      , Err(e) => {
          eprintln!("{}", report::render_failure(&e));
          return ExitCode::FAILURE;
        }
    };

    println!("{}", report::render_banner(&client.config().model));

    match client.generate_completion(DEMO_PROMPT).await
    {   Ok(result) => {
          println!("{}", report::render_completion(&result));
          ExitCode::SUCCESS
        }
      , Err(e) => {
          eprintln!("{}", report::render_failure(&e));
          ExitCode::FAILURE
        }
    }
}
