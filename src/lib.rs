//! Pokedex - An interactive PokeAPI client
//!
//! Pages through location areas and the Pokemon found in them. Every API
//! response is kept in a time-expiring cache reaped in the background.

pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokeapi::PokeApiClient;
