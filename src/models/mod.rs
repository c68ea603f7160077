//! Response models for the PokeAPI
//!
//! Defines the DTOs the client deserializes raw (possibly cached) response
//! bodies into.

pub mod responses;

// Re-export commonly used types
pub use responses::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
