//! Representations of data from PokeAPI.

use crate::errors::MissingIdError;
use crate::types::PokemonId;
use serde::Deserialize;

/// One entry of the Pokemon collection: a name and the canonical API URL of
/// the full resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

impl PokemonSummary {
    /// The identifier of this Pokemon, derived from its canonical URL.
    pub fn id(&self) -> Result<PokemonId, MissingIdError> {
        id_from_url(&self.url)
    }
}

/// Envelope of paginated collection endpoints.
///
/// `next` and `previous` are part of the response shape but are never
/// followed: the list is fetched as a single page.
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Derive an identifier from a resource URL: the last non-empty path segment.
///
/// # Examples
///
/// - `https://pokeapi.co/api/v2/pokemon/25/` → `25`
/// - `https://pokeapi.co/api/v2/pokemon/1` → `1`
pub fn id_from_url(url: &str) -> Result<PokemonId, MissingIdError> {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(|segment| PokemonId::new(segment.to_string()))
        .ok_or_else(|| MissingIdError(url.to_string()))
}
