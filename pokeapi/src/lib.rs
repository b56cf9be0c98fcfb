pub mod errors;
pub mod models;
pub mod sprites;
pub mod types;

mod client;

pub use client::{PokeClient, PokeClientBuilder};
