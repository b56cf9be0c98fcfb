use pokeapi::sprites::{sprite_url, SpriteVariant};
use pokeapi::types::PokemonId;

/// Print the sprite URLs of a Pokemon, one labeled line per variant.
pub fn print_sprites(id: &PokemonId) {
    for variant in SpriteVariant::ALL {
        println!("{:<12} {}", variant.label(), sprite_url(id, variant));
    }
}
