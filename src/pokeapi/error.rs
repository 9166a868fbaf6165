use thiserror::Error;

/// Errors from a pokémon lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No pokémon named '{name}'")]
    NotFound { name: String },

    #[error("PokéAPI returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    /// Message shown in the rejected pane.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
