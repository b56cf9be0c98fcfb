use color_eyre::eyre::Result;
use log::debug;
use pokeapi::types::ApiUrl;
use pokeapi::PokeClient;
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;

/// How many times to retry a transiently-failed request.
const MAX_RETRIES: u32 = 3;

/// Build a PokeAPI client which retries transient failures with
/// exponential backoff.
pub fn build_client(url: &ApiUrl) -> Result<PokeClient> {
    debug!("using PokeAPI at {}", url);
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES);
    let client = PokeClient::build(url.clone())?
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();
    Ok(client)
}
