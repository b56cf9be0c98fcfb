use clap::Parser;
use color_eyre::eyre::Result;
use color_eyre::owo_colors::OwoColorize;
use log::debug;
use pokeapi::PokeClient;

#[derive(Parser)]
pub struct ListArgs {
    /// How many Pokemon to fetch
    #[clap(short, long, default_value_t = 100)]
    limit: u32,

    /// Do not print header
    #[clap(short, long)]
    no_header: bool,
}

pub async fn list_pokemon(client: PokeClient, args: ListArgs) -> Result<()> {
    let pokemon = client.list_pokemon(args.limit).await?;
    debug!("fetched {} pokemon from {}", pokemon.len(), client.url());
    if !args.no_header {
        println!(
            "{:<8} {:<60}",
            "ID".bold().underline(),
            "Name".bold().underline()
        );
    }
    for p in &pokemon {
        let id = p.id()?;
        println!("{:<8} {}", id.bold(), capitalize(&p.name));
    }
    Ok(())
}

/// Uppercase the first character for display.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("bulbasaur", "Bulbasaur")]
    #[case("mr-mime", "Mr-mime")]
    #[case("X", "X")]
    #[case("", "")]
    fn test_capitalize(#[case] given: &str, #[case] expected: &str) {
        assert_eq!(capitalize(given), expected);
    }
}
