//! PokeAPI Module
//!
//! Cached HTTP access to the public PokeAPI.
//!
//! # Endpoints used
//! - `GET /location-area` - Paged list of location areas
//! - `GET /location-area/{name}` - A location area and its Pokemon encounters

pub mod client;

pub use client::PokeApiClient;
