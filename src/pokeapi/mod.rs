//! Minimal PokéAPI client: one pokémon lookup per call, no retries, no cache.

mod client;
mod error;
mod types;

pub use client::{fetch_pokemon, API_BASE};
pub use error::FetchError;
pub use types::{NamedResource, Pokemon, StatSlot, TypeSlot};
