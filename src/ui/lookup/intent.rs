//! Intents for the lookup pane.

use crate::pokeapi::Pokemon;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LookupIntent {
    /// A name was submitted. An empty name resets the pane to idle;
    /// otherwise a fetch stamped with `generation` has been started.
    Submit { name: String, generation: u64 },

    /// A fetch finished. Applied only when `generation` matches the
    /// in-flight fetch; stale completions leave the state untouched.
    Completed {
        generation: u64,
        outcome: Result<Pokemon, String>,
    },

    /// Advance the loading spinner.
    AnimationTick,
}

impl Intent for LookupIntent {}
