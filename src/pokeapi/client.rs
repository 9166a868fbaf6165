use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::pokeapi::error::FetchError;
use crate::pokeapi::types::Pokemon;

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Fetch one pokémon by name.
///
/// The name is trimmed and lowercased before the request; PokéAPI slugs are
/// all lowercase. Exactly one request is made per call.
pub async fn fetch_pokemon(client: &Client, name: &str) -> Result<Pokemon, FetchError> {
    let slug = name.trim().to_ascii_lowercase();
    let url = format!("{API_BASE}/pokemon/{slug}");
    debug!(name = %slug, "fetching pokemon");

    let response = client.get(&url).send().await?;
    match response.status() {
        StatusCode::NOT_FOUND => Err(FetchError::NotFound { name: slug }),
        status if !status.is_success() => Err(FetchError::Status { status }),
        _ => Ok(response.json::<Pokemon>().await?),
    }
}
