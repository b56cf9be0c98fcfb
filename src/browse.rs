use clap::Parser;
use color_eyre::eyre::Result;
use color_eyre::owo_colors::OwoColorize;
use dialoguer::console::Term;
use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use pokeapi::PokeClient;

use crate::list::capitalize;
use crate::sprites::print_sprites;

#[derive(Parser)]
pub struct BrowseArgs {
    /// How many Pokemon to fetch
    #[clap(short, long, default_value_t = 100)]
    limit: u32,
}

/// Fetch the list once, then loop: an arrow-key menu selects a Pokemon,
/// its sprite URLs are shown, and the menu comes back. Esc or `q` quits.
///
/// The fetched list is never mutated; selections only read from it.
pub async fn browse(client: PokeClient, args: BrowseArgs) -> Result<()> {
    let pokemon = client.list_pokemon(args.limit).await?;
    if pokemon.is_empty() {
        println!("No Pokemon found.");
        return Ok(());
    }
    debug!("browsing {} pokemon", pokemon.len());
    let names: Vec<String> = pokemon.iter().map(|p| capitalize(&p.name)).collect();
    let mut cursor = 0;
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Pokemon (Esc to quit)")
            .items(&names)
            .default(cursor)
            .interact_on_opt(&Term::stderr())?;
        let Some(index) = selection else {
            return Ok(());
        };
        cursor = index;
        let id = pokemon[index].id()?;
        println!("{}", names[index].bold().underline());
        print_sprites(&id);
        println!();
    }
}
