//! Trainer pane: a text field whose value is persisted across runs.

mod intent;
mod pane;
mod reducer;
mod state;

pub use intent::GreetingIntent;
pub use pane::draw_greeting;
pub use reducer::GreetingReducer;
pub use state::GreetingState;

/// Store key the trainer name is persisted under.
pub const TRAINER_NAME_KEY: &str = "trainer.name";
