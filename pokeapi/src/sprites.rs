//! Sprite image URLs, addressed by identifier and variant.
//!
//! URL construction is pure string substitution. The identifier is not
//! checked for existence: an unknown id yields a well-formed URL to a
//! missing image, and it is the image consumer's problem.

use crate::types::PokemonId;

/// Base path under which all Pokemon sprites are hosted.
pub const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/";

/// Which rendering of a Pokemon sprite to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteVariant {
    Front,
    Back,
    FrontShiny,
    BackShiny,
}

impl SpriteVariant {
    /// Every variant, in display order.
    pub const ALL: [SpriteVariant; 4] = [
        SpriteVariant::Front,
        SpriteVariant::Back,
        SpriteVariant::FrontShiny,
        SpriteVariant::BackShiny,
    ];

    /// Path prefix under [SPRITE_BASE_URL] selecting this variant.
    fn prefix(&self) -> &'static str {
        match self {
            SpriteVariant::Front => "",
            SpriteVariant::Back => "back/",
            SpriteVariant::FrontShiny => "shiny/",
            SpriteVariant::BackShiny => "back/shiny/",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SpriteVariant::Front => "Front",
            SpriteVariant::Back => "Back",
            SpriteVariant::FrontShiny => "Front Shiny",
            SpriteVariant::BackShiny => "Back Shiny",
        }
    }
}

/// Build the URL of a sprite image for the given Pokemon and variant.
pub fn sprite_url(id: &PokemonId, variant: SpriteVariant) -> String {
    format!("{}{}{}.png", SPRITE_BASE_URL, variant.prefix(), id)
}
