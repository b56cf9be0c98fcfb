use crate::errors::{check, PokeError};
use crate::models::{Paginated, PokemonSummary};
use crate::types::ApiUrl;
use reqwest::header::{HeaderMap, ACCEPT};
use serde::Serialize;

/// Query string parameters for the paginated list endpoint.
#[derive(Serialize)]
struct PageQuery {
    limit: u32,
}

/// PokeAPI client.
///
/// There is no authentication: every endpoint is public and read-only.
pub struct PokeClient {
    client: reqwest_middleware::ClientWithMiddleware,
    url: ApiUrl,
}

pub struct PokeClientBuilder {
    url: ApiUrl,
    builder: reqwest_middleware::ClientBuilder,
}

impl PokeClientBuilder {
    pub(crate) fn new(url: ApiUrl) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new()
            .default_headers(accept_json())
            .build()?;
        let builder = reqwest_middleware::ClientBuilder::new(client);
        Ok(Self { url, builder })
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        Self {
            url: self.url,
            builder: self.builder.with(middleware),
        }
    }

    pub fn build(self) -> PokeClient {
        PokeClient {
            client: self.builder.build(),
            url: self.url,
        }
    }
}

impl PokeClient {
    /// Create a client builder.
    pub fn build(url: ApiUrl) -> Result<PokeClientBuilder, reqwest::Error> {
        PokeClientBuilder::new(url)
    }

    /// The API base URL this client talks to.
    pub fn url(&self) -> &ApiUrl {
        &self.url
    }

    /// Fetch the first `limit` entries of the Pokemon collection, in
    /// response order. The server caps the result at the collection size,
    /// so fewer than `limit` entries may come back.
    ///
    /// One GET request per call. Dropping the returned future aborts the
    /// in-flight request.
    pub async fn list_pokemon(&self, limit: u32) -> Result<Vec<PokemonSummary>, PokeError> {
        let url = format!("{}pokemon", self.url);
        let res = self
            .client
            .get(url)
            .query(&PageQuery { limit })
            .send()
            .await?;
        let page: Paginated<PokemonSummary> = check(res).await?.json().await?;
        Ok(page.results)
    }
}

fn accept_json() -> HeaderMap {
    HeaderMap::from_iter([(ACCEPT, "application/json".parse().unwrap())])
}
