//! NewTypes for PokeAPI values.

use crate::errors::InvalidApiUrl;
use aliri_braid::braid;

/// An [ApiUrl] is the base URL for a PokeAPI deployment, e.g.
/// `https://pokeapi.co/api/v2/`
#[braid(validator, serde)]
pub struct ApiUrl(String);

impl aliri_braid::Validator for ApiUrl {
    type Error = InvalidApiUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidApiUrl::Protocol(s.to_string()))
        } else if !s.ends_with("/api/v2/") {
            Err(InvalidApiUrl::EndpointVersion(s.to_string()))
        } else {
            Ok(())
        }
    }
}

/// A Pokemon's identifier: the trailing path segment of its canonical URL.
#[braid(serde)]
pub struct PokemonId;
