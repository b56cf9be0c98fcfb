mod browse;
mod client;
mod list;
mod sprites;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use pokeapi::types::{ApiUrl, PokemonId};

#[derive(Parser)]
#[clap(
    author, version, about, long_about = None,
    propagate_version = false, disable_help_subcommand = true
)]
struct Cli {
    /// PokeAPI base URL
    #[clap(long, default_value = "https://pokeapi.co/api/v2/")]
    url: ApiUrl,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List Pokemon
    List(list::ListArgs),

    /// Show sprite image URLs for a Pokemon
    Sprites {
        /// Pokemon identifier (the trailing number of its API URL)
        id: PokemonId,
    },

    /// Pick a Pokemon from the list and show its sprites
    Browse(browse::BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();
    let args: Cli = Cli::parse();

    match args.command {
        Commands::List(list_args) => {
            let client = client::build_client(&args.url)?;
            list::list_pokemon(client, list_args).await
        }
        Commands::Sprites { id } => {
            sprites::print_sprites(&id);
            Ok(())
        }
        Commands::Browse(browse_args) => {
            let client = client::build_client(&args.url)?;
            browse::browse(client, browse_args).await
        }
    }
}
