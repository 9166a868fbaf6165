//! Lookup pane: one async pokémon fetch rendered through its lifecycle.

mod intent;
mod pane;
mod reducer;
mod state;

pub use intent::LookupIntent;
pub use pane::draw_lookup;
pub use reducer::LookupReducer;
pub use state::LookupState;
